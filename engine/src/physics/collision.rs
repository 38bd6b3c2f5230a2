//! Collision detection module
//!
//! Planar arena clamping, push-out collision against the static object list
//! and the ground/platform scan.
//!
//! # Push-out collision
//!
//! Every object is treated as a vertical cylinder of `radius` around its
//! centre. Resolution is a single pass in list order with no iteration to a
//! fixed point, so when two objects overlap the result reflects the last
//! object that pushed.
//!
//! # Example
//!
//! ```ignore
//! use walkthrough_engine::physics::collision::{clamp_to_arena, resolve_collisions};
//!
//! let proposed = clamp_to_arena(eye + displacement, ARENA_HALF_EXTENT);
//! let resolved = resolve_collisions(proposed, &scene.objects, COLLISION_RADIUS);
//! ```

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::world::StaticObject;

/// Half-width of the walkable square; walls stand at +/-10.
pub const ARENA_HALF_EXTENT: f32 = 9.5;

/// Minimum planar distance kept between the eye and any object centre.
pub const COLLISION_RADIUS: f32 = 1.0;

/// Half-size of the square footprint tested by the ground scan.
pub const FOOTPRINT_HALF_EXTENT: f32 = 0.5;

/// Maximum height difference for the eye to snap onto a platform top.
pub const SNAP_TOLERANCE: f32 = 0.3;

/// Eye height when standing on nothing.
pub const GROUND_LEVEL: f32 = 0.0;

/// Push direction used when the eye sits exactly on an object centre.
const DEFAULT_PUSH: Vec2 = Vec2::X;

/// Collision and ground-scan tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    pub arena_half_extent: f32,
    pub radius: f32,
    pub footprint_half_extent: f32,
    pub snap_tolerance: f32,
    pub ground_level: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            arena_half_extent: ARENA_HALF_EXTENT,
            radius: COLLISION_RADIUS,
            footprint_half_extent: FOOTPRINT_HALF_EXTENT,
            snap_tolerance: SNAP_TOLERANCE,
            ground_level: GROUND_LEVEL,
        }
    }
}

#[inline]
fn planar(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Clamp x and z independently into `[-half_extent, half_extent]`.
/// The y component is left untouched.
pub fn clamp_to_arena(position: Vec3, half_extent: f32) -> Vec3 {
    Vec3::new(
        position.x.clamp(-half_extent, half_extent),
        position.y,
        position.z.clamp(-half_extent, half_extent),
    )
}

/// Push `position` out of every object closer than `radius` on the XZ plane.
///
/// Objects are visited in list order and each push starts from the result
/// of the previous one. The y component is preserved.
pub fn resolve_collisions(position: Vec3, objects: &[StaticObject], radius: f32) -> Vec3 {
    objects.iter().fold(position, |current, object| {
        let offset = planar(current) - planar(object.position);
        if offset.length() >= radius {
            return current;
        }

        let direction = offset.try_normalize().unwrap_or(DEFAULT_PUSH);
        let pushed = planar(object.position) + direction * radius;
        Vec3::new(pushed.x, current.y, pushed.y)
    })
}

/// Height the eye should rest at when not jumping.
///
/// Returns the top of the first object (in list order) whose footprint
/// contains the eye's XZ position and whose top lies within `snap_tolerance`
/// of the current eye height. Otherwise returns the ground level. There is no
/// preference for the highest of several matching platforms.
pub fn ground_height(eye: Vec3, objects: &[StaticObject], config: &CollisionConfig) -> f32 {
    objects
        .iter()
        .find(|object| {
            let diff = eye - object.position;
            diff.x.abs() < config.footprint_half_extent
                && diff.z.abs() < config.footprint_half_extent
                && (eye.y - object.top()).abs() < config.snap_tolerance
        })
        .map_or(config.ground_level, StaticObject::top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ObjectKind;

    fn cube(position: Vec3) -> StaticObject {
        StaticObject::new(ObjectKind::Cube, position, Vec3::splat(0.5))
    }

    #[test]
    fn test_clamp_inside_is_unchanged() {
        let p = Vec3::new(3.0, 1.0, -4.0);
        assert_eq!(clamp_to_arena(p, ARENA_HALF_EXTENT), p);
    }

    #[test]
    fn test_clamp_each_axis_independently() {
        let p = clamp_to_arena(Vec3::new(-20.0, 7.0, 11.0), ARENA_HALF_EXTENT);
        assert_eq!(p, Vec3::new(-9.5, 7.0, 9.5));
    }

    #[test]
    fn test_no_push_outside_radius() {
        let objects = [cube(Vec3::new(3.0, 0.0, 0.0))];
        let p = Vec3::new(1.5, 0.0, 0.0);
        assert_eq!(resolve_collisions(p, &objects, COLLISION_RADIUS), p);
    }

    #[test]
    fn test_push_ignores_height_difference() {
        let objects = [cube(Vec3::new(0.0, -5.0, 0.5))];
        let p = resolve_collisions(Vec3::new(0.0, 1.0, 0.0), &objects, COLLISION_RADIUS);
        assert!((p - Vec3::new(0.0, 1.0, -0.5)).length() < 1e-6);
    }

    #[test]
    fn test_coincident_centre_pushes_along_x() {
        let objects = [cube(Vec3::new(2.0, 0.0, 2.0))];
        let p = resolve_collisions(Vec3::new(2.0, 0.3, 2.0), &objects, COLLISION_RADIUS);
        assert!(p.is_finite());
        assert!((p - Vec3::new(3.0, 0.3, 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_last_push_wins() {
        // Pushed out of the first object straight into the second; the
        // second push is applied and nothing re-checks the first.
        let objects = [cube(Vec3::new(0.0, 0.0, 0.0)), cube(Vec3::new(1.5, 0.0, 0.0))];
        let p = resolve_collisions(Vec3::new(0.5, 0.0, 0.0), &objects, COLLISION_RADIUS);
        assert!((p - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
        assert!(planar(p).distance(Vec2::ZERO) < COLLISION_RADIUS);
    }

    #[test]
    fn test_ground_none_matches() {
        let config = CollisionConfig::default();
        let objects = [cube(Vec3::new(5.0, 0.0, 5.0))];
        assert_eq!(ground_height(Vec3::new(0.0, 0.4, 0.0), &objects, &config), 0.0);
    }

    #[test]
    fn test_ground_out_of_snap_tolerance() {
        let config = CollisionConfig::default();
        let objects = [cube(Vec3::ZERO)];
        // Inside the footprint but 0.5 below the top
        assert_eq!(ground_height(Vec3::new(0.1, 0.0, 0.1), &objects, &config), 0.0);
    }

    #[test]
    fn test_ground_first_match_wins() {
        let config = CollisionConfig::default();
        let low = StaticObject::new(ObjectKind::Cube, Vec3::ZERO, Vec3::splat(0.4));
        let high = StaticObject::new(ObjectKind::Cube, Vec3::ZERO, Vec3::splat(0.6));
        let eye = Vec3::new(0.0, 0.5, 0.0);

        assert!((ground_height(eye, &[low, high], &config) - 0.4).abs() < 1e-6);
        assert!((ground_height(eye, &[high, low], &config) - 0.6).abs() < 1e-6);
    }
}
