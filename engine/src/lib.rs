//! Walkthrough Engine Library
//!
//! The window-independent core of a first-person walkthrough: a yaw/pitch
//! camera walking through a small walled room with a teapot and a few
//! crates. Mouse look, camera-relative WASD, sprint, a scripted jump,
//! circular collision against scene objects, and a proximity effect that
//! spins the teapot and flashes the lights.
//!
//! # Modules
//!
//! - [`math`] - Quaternions and transform matrix helpers
//! - [`camera`] - Camera pose, view basis, view/projection matrices
//! - [`input`] - Platform-agnostic keyboard and centred-cursor state
//! - [`physics`] - Arena clamp, object push-out, ground-height scan
//! - [`player`] - Movement step and jump state machine
//! - [`world`] - Scene content and the proximity effect
//! - [`render`] - Per-object uniforms and the frame draw list
//! - [`session`] - One frame of the walkthrough, minus the window
//! - [`config`] - JSON-loadable tuning
//!
//! # Example
//!
//! ```ignore
//! use walkthrough_engine::{FrameStatus, KeyCode, Scene, WalkthroughConfig, WalkthroughSession};
//!
//! let mut session = WalkthroughSession::new(WalkthroughConfig::default(), Scene::arena());
//!
//! // Event loop
//! session.input_mut().keyboard.handle_key(KeyCode::W, true);
//!
//! // Frame update
//! if session.frame(now, cursor_x, cursor_y) == FrameStatus::ExitRequested {
//!     return;
//! }
//! for draw in session.draw_list() {
//!     // bind the mesh for draw.kind, upload draw.uniforms, draw
//! }
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod math;
pub mod physics;
pub mod player;
pub mod render;
pub mod session;
pub mod world;

pub use camera::Camera;
pub use config::{ConfigError, WalkthroughConfig, WindowConfig};
pub use input::{FrameInput, InputState, KeyCode, KeyboardState};
pub use math::Quaternion;
pub use player::{JumpState, MovementController};
pub use session::{FrameClock, FrameStatus, WalkthroughSession};
pub use world::{ProximityEffect, Scene, StaticObject};
