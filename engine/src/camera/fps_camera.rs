//! First-Person Camera
//!
//! Holds the viewer pose and derives an orthonormal view basis from yaw and
//! pitch. Mouse input is applied by the movement controller; this type only
//! does the math.
//!
//! Key properties:
//! - Yaw and pitch are accumulated without wraparound or clamping, so the
//!   camera can flip fully over vertically
//! - `front`, `right` and `up` are derived state, recomputed by
//!   [`Camera::update_basis`] every frame
//! - Field of view is written from outside (sprint widens it)
//!
//! # Coordinate System
//! - +X = right, +Y = up
//! - yaw = 0 looks toward +X, yaw = -90 degrees looks toward -Z

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::radians;

/// World up reference used for the right vector.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Near clip plane distance.
pub const NEAR_PLANE: f32 = 0.2;

/// Far clip plane distance.
pub const FAR_PLANE: f32 = 100.0;

/// Field of view in degrees when not sprinting.
pub const BASE_FOV: f32 = 45.0;

/// Starting pose and clip planes for the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting eye position
    pub eye: Vec3,
    /// Starting yaw in degrees
    pub yaw_degrees: f32,
    /// Starting pitch in degrees
    pub pitch_degrees: f32,
    /// Starting field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            yaw_degrees: -90.0, // facing the origin from +Z
            pitch_degrees: 0.0,
            fov: BASE_FOV,
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }
}

/// Camera pose and cached matrices.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = Camera::new();
/// camera.yaw += 0.1;
/// camera.update_basis();
/// camera.update_matrices(1024.0 / 768.0);
/// let mvp = camera.projection * camera.view * model;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position in world space
    pub eye: Vec3,
    /// Horizontal angle (radians), unbounded
    pub yaw: f32,
    /// Vertical angle (radians), unbounded
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Unit look direction
    pub front: Vec3,
    /// Unit right vector, perpendicular to `front` and `WORLD_UP`
    pub right: Vec3,
    /// Unit camera up vector
    pub up: Vec3,
    /// Cached view matrix from the last `update_matrices`
    pub view: Mat4,
    /// Cached projection matrix from the last `update_matrices`
    pub projection: Mat4,
    near: f32,
    far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Camera {
    /// Create a camera with the default starting pose.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera from a starting pose description.
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            eye: config.eye,
            yaw: radians(config.yaw_degrees),
            pitch: radians(config.pitch_degrees),
            fov: config.fov,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            near: config.near,
            far: config.far,
        };
        camera.update_basis();
        camera
    }

    /// Create a camera at `eye` with the given angles (radians).
    pub fn with_pose(eye: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            eye,
            yaw,
            pitch,
            ..Self::default()
        };
        camera.update_basis();
        camera
    }

    /// Near and far clip distances.
    #[inline]
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    /// Recompute `front`, `right` and `up` from yaw and pitch.
    ///
    /// At exactly +/-90 degrees pitch `front` is parallel to `WORLD_UP` and the
    /// cross product vanishes; the yaw-only right vector is used instead.
    pub fn update_basis(&mut self) {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        let yaw_only = Vec3::new(cos_yaw, 0.0, sin_yaw);
        self.front = Vec3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw)
            .try_normalize()
            .unwrap_or(yaw_only);

        let yaw_right = Vec3::new(-sin_yaw, 0.0, cos_yaw);
        self.right = self
            .front
            .cross(WORLD_UP)
            .try_normalize()
            .unwrap_or(yaw_right);

        self.up = self.right.cross(self.front).try_normalize().unwrap_or(WORLD_UP);
    }

    /// Point the eye is looking at.
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.eye + self.front
    }

    /// View matrix looking from `eye` toward `eye + front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target(), self.up)
    }

    /// OpenGL-convention perspective projection for the current `fov`.
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(radians(self.fov), aspect, self.near, self.far)
    }

    /// Refresh the cached `view` and `projection` matrices.
    pub fn update_matrices(&mut self, aspect: f32) {
        self.view = self.view_matrix();
        self.projection = self.projection_matrix(aspect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_default_pose() {
        let camera = Camera::new();
        assert_eq!(camera.eye, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(camera.fov, BASE_FOV);
        assert_eq!(camera.clip_planes(), (NEAR_PLANE, FAR_PLANE));
    }

    #[test]
    fn test_default_looks_at_origin() {
        let camera = Camera::new();
        assert!((camera.front - Vec3::NEG_Z).length() < 1e-5);
        assert!((camera.right - Vec3::X).length() < 1e-5);
        assert!((camera.up - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_yaw_zero_looks_along_x() {
        let camera = Camera::with_pose(Vec3::ZERO, 0.0, 0.0);
        assert!((camera.front - Vec3::X).length() < 1e-5);
        assert!((camera.right - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_straight_up_uses_yaw_right() {
        let mut camera = Camera::with_pose(Vec3::ZERO, 0.3, 0.0);
        camera.pitch = FRAC_PI_2;
        camera.update_basis();

        assert!(camera.right.is_finite());
        assert!(camera.up.is_finite());
        assert!((camera.right.length() - 1.0).abs() < 1e-5);
        assert!(camera.front.dot(camera.right).abs() < 1e-5);
    }

    #[test]
    fn test_pitch_half_turn_looks_backwards() {
        let camera = Camera::with_pose(Vec3::ZERO, 0.0, PI);
        assert!((camera.front - Vec3::NEG_X).length() < 1e-5);
        assert!((camera.right - Vec3::NEG_Z).length() < 1e-5);
        assert!(camera.up.y > 0.99);
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let camera = Camera::with_pose(Vec3::new(1.0, 2.0, 3.0), 0.7, -0.2);
        let eye_in_view = camera.view_matrix().transform_point3(camera.eye);
        assert!(eye_in_view.length() < 1e-4);
    }

    #[test]
    fn test_view_matrix_front_is_negative_z() {
        let camera = Camera::with_pose(Vec3::ZERO, 1.2, 0.4);
        let ahead = camera.view_matrix().transform_point3(camera.target());
        assert!((ahead - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_projection_depends_on_fov() {
        let mut camera = Camera::new();
        let narrow = camera.projection_matrix(4.0 / 3.0);
        camera.fov = 60.0;
        let wide = camera.projection_matrix(4.0 / 3.0);
        // Wider field of view gives a smaller focal scale.
        assert!(wide.y_axis.y < narrow.y_axis.y);
    }

    #[test]
    fn test_update_matrices_caches() {
        let mut camera = Camera::new();
        camera.update_matrices(2.0);
        assert_eq!(camera.view, camera.view_matrix());
        assert_eq!(camera.projection, camera.projection_matrix(2.0));
    }
}
