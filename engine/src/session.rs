//! Walkthrough Session
//!
//! Owns everything that changes from frame to frame and runs one frame in a
//! fixed order: clock, input snapshot, movement step, matrix refresh,
//! proximity effect. The windowing layer feeds key events into
//! [`WalkthroughSession::input_mut`], calls [`WalkthroughSession::frame`]
//! once per iteration, warps the cursor back to the centre, and then reads
//! the draw list.

use glam::Vec3;

use crate::camera::Camera;
use crate::config::WalkthroughConfig;
use crate::input::{FrameInput, InputState};
use crate::player::{JumpState, MovementController};
use crate::render::{DrawCommand, build_draw_list};
use crate::world::{ProximityEffect, Scene};

/// Turns absolute timestamps into per-frame elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    previous: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick (or since time zero on the first).
    /// A clock that runs backwards yields zero.
    pub fn tick(&mut self, now: f32) -> f32 {
        let dt = (now - self.previous).max(0.0);
        self.previous = now;
        dt
    }
}

/// Whether the frame loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Running,
    ExitRequested,
}

/// All per-frame state of a running walkthrough.
#[derive(Debug, Clone)]
pub struct WalkthroughSession {
    config: WalkthroughConfig,
    scene: Scene,
    camera: Camera,
    jump: JumpState,
    controller: MovementController,
    proximity: ProximityEffect,
    input: InputState,
    clock: FrameClock,
    time: f32,
    frames: u64,
}

impl WalkthroughSession {
    /// Start a session in `scene` with the configured starting pose.
    pub fn new(config: WalkthroughConfig, scene: Scene) -> Self {
        let mut camera = Camera::from_config(&config.camera);
        camera.update_matrices(config.window.aspect_ratio());

        log::info!(
            "walkthrough session: {} objects, {} lights, eye at {:?}",
            scene.objects.len(),
            scene.lights.len(),
            camera.eye
        );

        Self {
            camera,
            jump: JumpState::new(),
            controller: MovementController::with_config(config.movement),
            proximity: ProximityEffect::new(config.proximity),
            input: InputState::for_window(
                config.window.width,
                config.window.height,
                config.keys,
            ),
            clock: FrameClock::new(),
            time: 0.0,
            frames: 0,
            config,
            scene,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn jump(&self) -> &JumpState {
        &self.jump
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn proximity(&self) -> &ProximityEffect {
        &self.proximity
    }

    pub fn config(&self) -> &WalkthroughConfig {
        &self.config
    }

    /// Keyboard and cursor state, for feeding window events.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Timestamp of the latest frame in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at absolute time `now` with the cursor at `(x, y)`.
    pub fn frame(&mut self, now: f32, cursor_x: f64, cursor_y: f64) -> FrameStatus {
        let input = self.input.snapshot(cursor_x, cursor_y);
        let dt = self.clock.tick(now);
        self.time = now;
        self.advance(&input, dt)
    }

    /// Run one frame from an explicit input snapshot and elapsed time.
    pub fn advance(&mut self, input: &FrameInput, dt: f32) -> FrameStatus {
        if input.wants_exit() {
            log::info!("exit requested after {} frames", self.frames);
            return FrameStatus::ExitRequested;
        }

        let (camera, jump) =
            self.controller
                .step(&self.camera, &self.jump, &self.scene.objects, input, dt);
        self.camera = camera;
        self.jump = jump;
        self.camera.update_matrices(self.config.window.aspect_ratio());
        self.proximity.update(self.camera.eye, dt);
        self.frames += 1;

        log::trace!(
            "frame {}: dt={dt:.4} eye={:?} yaw={:.3} pitch={:.3} airborne={}",
            self.frames,
            self.camera.eye,
            self.camera.yaw,
            self.camera.pitch,
            self.jump.is_airborne()
        );

        FrameStatus::Running
    }

    /// Draw list for the current pose.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        build_draw_list(&self.scene.objects, &self.camera, &self.proximity)
    }

    /// Colour of each scene light at the current time, in light list order.
    pub fn light_colours(&self) -> Vec<Vec3> {
        self.scene
            .lights
            .iter()
            .map(|light| self.proximity.light_colour(light.kind, self.time))
            .collect()
    }
}
