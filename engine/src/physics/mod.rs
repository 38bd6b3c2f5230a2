//! Physics module
//!
//! Kinematic collision helpers for the walkthrough camera. There is no
//! rigid-body simulation: the eye is clamped into the arena, pushed out of
//! props, and snapped onto platform tops.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, angles in radians unless a name says degrees.
//!
//! # Submodules
//!
//! - [`collision`] - Arena clamp, push-out collision, ground/platform scan

pub mod collision;

pub use collision::{
    ARENA_HALF_EXTENT, COLLISION_RADIUS, CollisionConfig, FOOTPRINT_HALF_EXTENT, GROUND_LEVEL,
    SNAP_TOLERANCE, clamp_to_arena, ground_height, resolve_collisions,
};
