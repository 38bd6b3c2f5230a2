//! Camera Module
//!
//! First-person camera pose and view/projection math.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod fps_camera;

pub use fps_camera::{BASE_FOV, Camera, CameraConfig, FAR_PLANE, NEAR_PLANE, WORLD_UP};
