//! Player Movement Controller
//!
//! Turns one frame of input into a new camera pose. Movement direction is
//! relative to the camera's facing direction.
//!
//! # Frame Step
//!
//! 1. Mouse look: yaw/pitch from the cursor offset, basis recomputed
//! 2. Planar move: WASD along `front`/`right`, vertical part discarded
//! 3. Arena clamp on x and z
//! 4. Single-pass push-out collision against the object list
//! 5. Field of view: wide while sprinting
//! 6. Jump: rising edge starts the arc; otherwise the ground scan sets eye height
//!
//! # Model
//!
//! - Walk speed: 5.0 m/s, sprint x1.5
//! - No acceleration: displacement is `speed * dt` along each held direction
//! - No pitch clamp: the camera may flip over vertically
//!
//! # Usage
//!
//! ```rust,ignore
//! use walkthrough_engine::player::{JumpState, MovementController};
//!
//! let controller = MovementController::new();
//! let (camera, jump) = controller.step(&camera, &jump, &scene.objects, &frame_input, dt);
//! ```

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::jump::{JumpConfig, JumpState};
use crate::camera::{BASE_FOV, Camera};
use crate::input::{FrameInput, MovementKeys};
use crate::physics::{CollisionConfig, clamp_to_arena, ground_height, resolve_collisions};
use crate::world::StaticObject;

/// Mouse sensitivity in radians per pixel
pub const MOUSE_SENSITIVITY: f32 = 0.005;

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 5.0;

/// Speed multiplier while sprinting
pub const SPRINT_MULTIPLIER: f32 = 1.5;

/// Field of view in degrees while sprinting
pub const SPRINT_FOV: f32 = 60.0;

/// Configuration for the per-frame movement step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Radians of yaw/pitch per pixel of cursor offset
    pub sensitivity: f32,
    /// Base walking speed in meters per second
    pub walk_speed: f32,
    /// Applied to `walk_speed` while sprinting
    pub sprint_multiplier: f32,
    /// Field of view in degrees when walking
    pub base_fov: f32,
    /// Field of view in degrees when sprinting
    pub sprint_fov: f32,
    pub jump: JumpConfig,
    pub collision: CollisionConfig,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            sensitivity: MOUSE_SENSITIVITY,
            walk_speed: WALK_SPEED,
            sprint_multiplier: SPRINT_MULTIPLIER,
            base_fov: BASE_FOV,
            sprint_fov: SPRINT_FOV,
            jump: JumpConfig::default(),
            collision: CollisionConfig::default(),
        }
    }
}

impl MovementConfig {
    /// Movement speed for the given sprint state.
    #[inline]
    pub fn speed(&self, sprinting: bool) -> f32 {
        if sprinting {
            self.walk_speed * self.sprint_multiplier
        } else {
            self.walk_speed
        }
    }

    /// Field of view for the given sprint state.
    #[inline]
    pub fn fov(&self, sprinting: bool) -> f32 {
        if sprinting { self.sprint_fov } else { self.base_fov }
    }
}

/// Stateless per-frame movement step.
///
/// All mutable state lives in the `Camera` and `JumpState` passed to
/// [`MovementController::step`], which returns fresh copies of both.
#[derive(Debug, Clone, Default)]
pub struct MovementController {
    config: MovementConfig,
}

impl MovementController {
    /// Create a controller with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with custom tuning.
    pub fn with_config(config: MovementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Apply a cursor offset to yaw and pitch and rebuild the view basis.
    ///
    /// Screen y grows downward, so a positive `delta.y` pitches down.
    pub fn apply_look(&self, pose: &mut Camera, delta: Vec2) {
        pose.yaw += self.config.sensitivity * delta.x;
        pose.pitch += self.config.sensitivity * -delta.y;
        pose.update_basis();
    }

    /// Horizontal displacement requested by the held keys over `dt`.
    ///
    /// Contributions are summed along `front` and `right` before the
    /// vertical component is dropped, so looking up or down slows forward
    /// motion and diagonals are faster than straight lines.
    pub fn planar_displacement(&self, pose: &Camera, keys: &MovementKeys, dt: f32) -> Vec3 {
        let step = self.config.speed(keys.sprint) * dt;
        let mut displacement = Vec3::ZERO;

        if keys.forward {
            displacement += pose.front * step;
        }
        if keys.backward {
            displacement -= pose.front * step;
        }
        if keys.left {
            displacement -= pose.right * step;
        }
        if keys.right {
            displacement += pose.right * step;
        }

        displacement.y = 0.0;
        displacement
    }

    /// Advance the pose and jump state by one frame.
    ///
    /// The escape key is not handled here; see [`FrameInput::wants_exit`].
    pub fn step(
        &self,
        pose: &Camera,
        jump: &JumpState,
        objects: &[StaticObject],
        input: &FrameInput,
        dt: f32,
    ) -> (Camera, JumpState) {
        let mut pose = pose.clone();
        let mut jump = *jump;
        let collision = &self.config.collision;

        self.apply_look(&mut pose, input.mouse_delta);

        let proposed = pose.eye + self.planar_displacement(&pose, &input.keys, dt);
        let proposed = clamp_to_arena(proposed, collision.arena_half_extent);
        pose.eye = resolve_collisions(proposed, objects, collision.radius);

        pose.fov = self.config.fov(input.keys.sprint);

        jump.press(input.keys.jump);
        pose.eye.y = match jump.advance(dt, &self.config.jump) {
            Some(height) => height,
            None => ground_height(pose.eye, objects, collision),
        };

        (pose, jump)
    }
}
