//! Transform Matrix Builders
//!
//! Stateless builders for homogeneous 4x4 matrices. Model matrices are
//! always composed as `translate * rotate * scale`: scale first, then
//! rotate, then translate.

use glam::{Mat4, Vec3};

/// Convert degrees to radians.
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Translation by `v`.
pub fn translate(v: Vec3) -> Mat4 {
    Mat4::from_translation(v)
}

/// Independent per-axis scale by `v`.
pub fn scale(v: Vec3) -> Mat4 {
    Mat4::from_scale(v)
}

/// Rotation of `angle` radians about `axis`.
///
/// The axis does not need to be unit length. A zero axis is undefined.
pub fn rotate(angle: f32, axis: Vec3) -> Mat4 {
    Mat4::from_axis_angle(axis.normalize(), angle)
}

/// Compose a model matrix as `translate * rotate * scale`.
pub fn model_matrix(position: Vec3, angle: f32, axis: Vec3, size: Vec3) -> Mat4 {
    translate(position) * rotate(angle, axis) * scale(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_radians() {
        assert!((radians(180.0) - std::f32::consts::PI).abs() < EPSILON);
        assert!((radians(-90.0) + std::f32::consts::FRAC_PI_2).abs() < EPSILON);
        assert_eq!(radians(0.0), 0.0);
    }

    #[test]
    fn test_translate_moves_points_not_directions() {
        let m = translate(Vec3::new(1.0, -2.0, 3.0));
        let point = m * Vec4::new(4.0, 5.0, 6.0, 1.0);
        let direction = m * Vec4::new(4.0, 5.0, 6.0, 0.0);
        assert_eq!(point, Vec4::new(5.0, 3.0, 9.0, 1.0));
        assert_eq!(direction, Vec4::new(4.0, 5.0, 6.0, 0.0));
    }

    #[test]
    fn test_rotate_accepts_unnormalised_axis() {
        let a = rotate(0.8, Vec3::new(0.0, 0.0, 2.0));
        let b = rotate(0.8, Vec3::Z);
        assert!(a.abs_diff_eq(b, EPSILON));
    }

    #[test]
    fn test_model_matrix_scales_before_translating() {
        let m = model_matrix(Vec3::new(10.0, 0.0, 0.0), 0.0, Vec3::Y, Vec3::splat(2.0));
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.0));
        // Scaled to 2 first, then shifted by 10.
        assert!((p - Vec3::new(12.0, 0.0, 0.0)).length() < EPSILON);
    }
}
