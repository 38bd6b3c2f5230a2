//! World Module
//!
//! Static scene content and the proximity effect driven by the camera position.
//!
//! ## Default World
//! A 20m x 20m walled room with a teapot and crates, lit by one spotlight and
//! four point lights.

pub mod proximity;
pub mod scene;

pub use proximity::{ProximityConfig, ProximityEffect};
pub use scene::{LightKind, LightSource, ObjectKind, Scene, StaticObject};
