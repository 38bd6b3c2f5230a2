//! Math Tests - Quaternions and Transforms
//!
//! Tests for SLERP properties, quaternion to matrix conversion and the
//! transform matrix builders.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Quat, Vec3};
use walkthrough_engine::math::{Quaternion, model_matrix, radians, rotate, scale, translate};

const EPS: f32 = 1e-5;

fn close(a: Quaternion, b: Quaternion) -> bool {
    (a.w - b.w).abs() < 1e-4
        && (a.x - b.x).abs() < 1e-4
        && (a.y - b.y).abs() < 1e-4
        && (a.z - b.z).abs() < 1e-4
}

fn close_up_to_sign(a: Quaternion, b: Quaternion) -> bool {
    close(a, b) || close(a, -b)
}

// ============================================================================
// SLERP Tests
// ============================================================================

#[test]
fn test_slerp_same_endpoints() {
    let q = Quaternion::from_axis_angle(1.1, Vec3::new(1.0, 2.0, -0.5));
    for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
        assert!(close(Quaternion::slerp(q, q, t), q), "t = {t}");
    }
}

#[test]
fn test_slerp_endpoints() {
    let q1 = Quaternion::from_axis_angle(0.3, Vec3::X);
    let q2 = Quaternion::from_axis_angle(2.5, Vec3::new(0.0, 1.0, 1.0));

    assert!(close(Quaternion::slerp(q1, q2, 0.0), q1));
    assert!(close_up_to_sign(Quaternion::slerp(q1, q2, 1.0), q2));
}

#[test]
fn test_slerp_is_unit_along_path() {
    let q1 = Quaternion::from_pitch_yaw(0.4, -1.0);
    let q2 = Quaternion::from_pitch_yaw(-1.2, 2.0);
    for i in 0..=10 {
        let q = Quaternion::slerp(q1, q2, i as f32 / 10.0);
        assert!((q.length() - 1.0).abs() < 1e-4);
    }
}

#[test]
fn test_slerp_halfway_angle() {
    let q1 = Quaternion::IDENTITY;
    let q2 = Quaternion::from_axis_angle(FRAC_PI_2, Vec3::Y);
    let mid = Quaternion::slerp(q1, q2, 0.5);
    let expected = Quaternion::from_axis_angle(FRAC_PI_2 / 2.0, Vec3::Y);
    assert!(close(mid, expected));
}

#[test]
fn test_slerp_takes_shorter_arc() {
    let q1 = Quaternion::IDENTITY;
    let q2 = -Quaternion::from_axis_angle(0.5, Vec3::Z);
    let mid = Quaternion::slerp(q1, q2, 0.5);
    // Halfway along the short arc is a quarter of the rotation, not a half turn
    assert!(close_up_to_sign(mid, Quaternion::from_axis_angle(0.25, Vec3::Z)));
}

// ============================================================================
// Quaternion Matrix Tests
// ============================================================================

#[test]
fn test_matrix_matches_glam() {
    let cases = [
        (0.0, Vec3::X),
        (0.7, Vec3::new(1.0, 1.0, 1.0)),
        (PI, Vec3::Y),
        (-2.2, Vec3::new(0.3, -1.0, 0.5)),
    ];
    for (angle, axis) in cases {
        let q = Quaternion::from_axis_angle(angle, axis);
        let expected = Mat4::from_quat(Quat::from(q));
        assert!(q.to_matrix().abs_diff_eq(expected, EPS), "angle {angle}");
    }
}

#[test]
fn test_axis_angle_matches_rotate() {
    let axis = Vec3::new(2.0, -1.0, 0.5);
    let q = Quaternion::from_axis_angle(1.3, axis);
    assert!(q.to_matrix().abs_diff_eq(rotate(1.3, axis), EPS));
}

#[test]
fn test_pitch_yaw_is_unit() {
    for (pitch, yaw) in [(0.0, 0.0), (0.5, 1.0), (-1.5, 3.0), (2.0, -4.0)] {
        let q = Quaternion::from_pitch_yaw(pitch, yaw);
        assert!((q.length() - 1.0).abs() < EPS);
    }
}

// ============================================================================
// Transform Tests
// ============================================================================

#[test]
fn test_translate_shifts_points() {
    let v = Vec3::new(1.0, -2.0, 3.5);
    let p = Vec3::new(0.5, 0.5, 0.5);
    assert_eq!(translate(v).transform_point3(p), p + v);
    // Directions are unaffected
    assert_eq!(translate(v).transform_vector3(Vec3::X), Vec3::X);
}

#[test]
fn test_scale_per_axis() {
    let m = scale(Vec3::new(2.0, 3.0, 0.5));
    assert_eq!(
        m.transform_point3(Vec3::new(1.0, 1.0, 1.0)),
        Vec3::new(2.0, 3.0, 0.5)
    );
}

#[test]
fn test_half_rotation_twice_is_full() {
    let axis = Vec3::new(1.0, 1.0, 0.0);
    for angle in [0.3, 1.0, PI, 4.0] {
        let half = rotate(angle / 2.0, axis);
        assert!((half * half).abs_diff_eq(rotate(angle, axis), 1e-4));
    }
}

#[test]
fn test_model_matrix_order() {
    let position = Vec3::new(0.0, 10.0, 0.0);
    let m = model_matrix(position, radians(180.0), Vec3::X, Vec3::splat(10.0));
    // Scale, then flip about X, then translate
    let p = m.transform_point3(Vec3::new(0.0, 1.0, 0.0));
    assert!((p - Vec3::new(0.0, 0.0, 0.0)).length() < 1e-4);
}
