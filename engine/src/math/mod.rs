//! Math Module
//!
//! Orientation and transform primitives shared by the camera, the movement
//! controller and the render interface.
//!
//! - [`quaternion`] - Unit quaternion, rotation matrix conversion, SLERP
//! - [`transform`] - Translate/scale/rotate matrix builders and degree conversion

pub mod quaternion;
pub mod transform;

pub use quaternion::Quaternion;
pub use transform::{model_matrix, radians, rotate, scale, translate};
