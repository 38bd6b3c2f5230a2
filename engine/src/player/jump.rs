//! Scripted Jump
//!
//! A two-state jump: `Idle` and `Jumping`. A jump follows a fixed half-sine
//! arc over a fixed duration instead of integrating gravity.
//!
//! | State   | Event                         | Next    | Action                              |
//! |---------|-------------------------------|---------|-------------------------------------|
//! | Idle    | jump key rising edge          | Jumping | timer = 0                           |
//! | Jumping | timer < duration              | Jumping | eye.y = height * sin(pi * t / d)    |
//! | Jumping | timer >= duration             | Idle    | timer = duration                    |
//! | Idle    | no rising edge                | Idle    | eye.y from the ground scan          |

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Length of a jump in seconds
pub const JUMP_DURATION: f32 = 1.0;

/// Peak eye height of a jump in meters
pub const JUMP_HEIGHT: f32 = 1.5;

/// Shape of the jump arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    /// Seconds from take-off to landing
    pub duration: f32,
    /// Peak height reached halfway through
    pub height: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            duration: JUMP_DURATION,
            height: JUMP_HEIGHT,
        }
    }
}

/// Eye height `timer` seconds into a jump.
///
/// A non-positive duration is treated as an already finished jump.
pub fn jump_height(timer: f32, config: &JumpConfig) -> f32 {
    let progress = if config.duration > 0.0 {
        timer / config.duration
    } else {
        1.0
    };
    config.height * (PI * progress).sin()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Idle,
    Jumping,
}

/// Jump state carried from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JumpState {
    phase: JumpPhase,
    /// Seconds since take-off, clamped to the duration on landing
    timer: f32,
    /// Jump key level seen on the previous frame, for edge detection
    key_was_down: bool,
}

impl JumpState {
    /// Idle, on the ground, jump key up.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    #[inline]
    pub fn is_airborne(&self) -> bool {
        self.phase == JumpPhase::Jumping
    }

    #[inline]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Feed this frame's jump key level.
    ///
    /// Starts a jump on a released-to-pressed transition while idle and
    /// returns whether one started. Holding the key, or pressing it
    /// mid-air, does nothing.
    pub fn press(&mut self, key_down: bool) -> bool {
        let rising_edge = key_down && !self.key_was_down;
        self.key_was_down = key_down;

        if rising_edge && !self.is_airborne() {
            self.phase = JumpPhase::Jumping;
            self.timer = 0.0;
            log::debug!("jump started");
            return true;
        }
        false
    }

    /// Advance an active jump by `dt` seconds.
    ///
    /// Returns the eye height while jumping, including on the landing frame.
    /// Returns `None` when idle, in which case the ground scan decides the
    /// height.
    pub fn advance(&mut self, dt: f32, config: &JumpConfig) -> Option<f32> {
        if !self.is_airborne() {
            return None;
        }

        self.timer += dt;
        if self.timer >= config.duration {
            self.timer = config.duration;
            self.phase = JumpPhase::Idle;
            log::debug!("jump landed after {:.2}s", self.timer);
        }

        // On the landing frame this is sin(pi) ~ 0; the ground scan takes over next frame
        Some(jump_height(self.timer, config))
    }
}
