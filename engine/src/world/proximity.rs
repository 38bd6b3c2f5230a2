//! Proximity Effect
//!
//! While the camera is close to the origin the teapot spins and the point
//! lights flash between red and blue. The spotlight is always yellow.
//! This module only computes the values; the renderer applies them.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::scene::LightKind;
use crate::math::{Quaternion, radians};

const SPOT_COLOUR: Vec3 = Vec3::new(1.0, 1.0, 0.0);
const IDLE_COLOUR: Vec3 = Vec3::ONE;
const FLASH_FROM: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const FLASH_TO: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Tuning for the proximity effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    /// Distance from the origin below which the effect is active
    pub threshold: f32,
    /// Teapot spin rate in degrees per second
    pub spin_degrees_per_second: f32,
    /// Angular frequency of the light flash (radians per second)
    pub flash_rate: f32,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            threshold: 3.0,
            spin_degrees_per_second: 10.0,
            flash_rate: 5.0,
        }
    }
}

/// Proximity effect state carried across frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProximityEffect {
    config: ProximityConfig,
    /// Teapot spin in degrees, kept within [0, 360]
    teapot_yaw: f32,
    in_proximity: bool,
}

impl ProximityEffect {
    pub fn new(config: ProximityConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance one frame for a camera at `eye`.
    pub fn update(&mut self, eye: Vec3, dt: f32) {
        let was_in_proximity = self.in_proximity;
        self.in_proximity = eye.length() < self.config.threshold;

        if self.in_proximity != was_in_proximity {
            log::debug!(
                "proximity effect {} at distance {:.2}",
                if self.in_proximity { "on" } else { "off" },
                eye.length()
            );
        }

        if self.in_proximity {
            self.teapot_yaw += dt * self.config.spin_degrees_per_second;
            if self.teapot_yaw > 360.0 {
                self.teapot_yaw -= 360.0;
            }
        }
    }

    #[inline]
    pub fn in_proximity(&self) -> bool {
        self.in_proximity
    }

    /// Current teapot spin in degrees.
    #[inline]
    pub fn teapot_yaw(&self) -> f32 {
        self.teapot_yaw
    }

    /// Rotation matrix replacing the teapot's own rotation.
    pub fn teapot_spin(&self) -> Mat4 {
        Quaternion::from_pitch_yaw(0.0, radians(self.teapot_yaw)).to_matrix()
    }

    /// Colour of a light of `kind` at absolute time `time` (seconds).
    pub fn light_colour(&self, kind: LightKind, time: f32) -> Vec3 {
        match kind {
            LightKind::Spot => SPOT_COLOUR,
            LightKind::Point if self.in_proximity => {
                let t = ((time * self.config.flash_rate).sin() + 1.0) / 2.0;
                FLASH_FROM.lerp(FLASH_TO, t)
            }
            LightKind::Point => IDLE_COLOUR,
        }
    }
}
