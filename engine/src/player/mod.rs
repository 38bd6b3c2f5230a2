//! Player Module
//!
//! Per-frame movement of the first-person viewer.
//!
//! # Components
//!
//! - [`MovementController`] - Mouse look, camera-relative WASD, arena clamp, collision
//! - [`JumpState`] - Two-state scripted jump with rising-edge trigger
//! - [`MovementConfig`] / [`JumpConfig`] - Tuning, loadable from JSON

pub mod jump;
pub mod movement_controller;

pub use jump::{JUMP_DURATION, JUMP_HEIGHT, JumpConfig, JumpPhase, JumpState, jump_height};
pub use movement_controller::{
    MOUSE_SENSITIVITY, MovementConfig, MovementController, SPRINT_FOV, SPRINT_MULTIPLIER,
    WALK_SPEED,
};
