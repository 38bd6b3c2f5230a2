//! Quaternion Orientation
//!
//! A small unit-quaternion type stored as `(w, x, y, z)`. Provides the
//! constructors used by the scene (angle-axis and pitch/yaw), conversion
//! to a 4x4 rotation matrix, and spherical interpolation.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkthrough_engine::math::Quaternion;
//!
//! let spin = Quaternion::from_pitch_yaw(0.0, radians(45.0));
//! let model = translate(position) * spin.to_matrix() * scale(size);
//! ```

use std::ops::Neg;

use glam::{Mat4, Quat, Vec3, Vec4};

/// Dot-product threshold above which `slerp` falls back to normalised lerp.
pub const SLERP_PARALLEL_EPSILON: f32 = 1e-4;

/// Unit quaternion `w + xi + yj + zk`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a quaternion from raw components. No normalisation is applied.
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalised here. A zero axis has no defined rotation and
    /// yields NaN components; callers must not pass one.
    pub fn from_axis_angle(angle: f32, axis: Vec3) -> Self {
        let axis = axis.normalize();
        let (sin_half, cos_half) = (0.5 * angle).sin_cos();
        Self {
            w: cos_half,
            x: axis.x * sin_half,
            y: axis.y * sin_half,
            z: axis.z * sin_half,
        }
    }

    /// Rotation by `pitch` about X composed with `yaw` about Y (radians).
    ///
    /// Equivalent to `from_axis_angle(pitch, X) * from_axis_angle(yaw, Y)`.
    pub fn from_pitch_yaw(pitch: f32, yaw: f32) -> Self {
        let (sin_pitch, cos_pitch) = (0.5 * pitch).sin_cos();
        let (sin_yaw, cos_yaw) = (0.5 * yaw).sin_cos();
        Self {
            w: cos_pitch * cos_yaw,
            x: sin_pitch * cos_yaw,
            y: cos_pitch * sin_yaw,
            z: sin_pitch * sin_yaw,
        }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length. A zero quaternion becomes the identity.
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length <= f32::EPSILON {
            return Self::IDENTITY;
        }
        self.scaled(1.0 / length)
    }

    #[inline]
    fn scaled(self, s: f32) -> Self {
        Self::new(self.w * s, self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    fn added(self, other: Self) -> Self {
        Self::new(
            self.w + other.w,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }

    /// Convert to a column-major 4x4 rotation matrix.
    pub fn to_matrix(self) -> Mat4 {
        let Self { w, x, y, z } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat4::from_cols(
            Vec4::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy), 0.0),
            Vec4::new(2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx), 0.0),
            Vec4::new(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy), 0.0),
            Vec4::W,
        )
    }

    /// Spherical linear interpolation from `q1` (t = 0) to `q2` (t = 1).
    ///
    /// Always travels the shorter arc: if the inputs lie in opposite
    /// hemispheres `q2` is negated first, so `slerp(q1, q2, 1.0)` may return
    /// `-q2`. Nearly parallel inputs use normalised lerp to keep the
    /// `sin(theta)` denominator away from zero.
    pub fn slerp(q1: Self, q2: Self, t: f32) -> Self {
        let mut end = q2;
        let mut cos_theta = q1.dot(q2);

        if cos_theta < 0.0 {
            end = -end;
            cos_theta = -cos_theta;
        }

        if cos_theta > 1.0 - SLERP_PARALLEL_EPSILON {
            return q1.scaled(1.0 - t).added(end.scaled(t)).normalize();
        }

        let theta = cos_theta.acos();
        let sin_theta = theta.sin();
        let weight_start = ((1.0 - t) * theta).sin() / sin_theta;
        let weight_end = (t * theta).sin() / sin_theta;

        q1.scaled(weight_start).added(end.scaled(weight_end))
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}
