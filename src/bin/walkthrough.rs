//! Walkthrough - Scripted Tour
//!
//! Run with: `cargo run --bin walkthrough [config.json]`
//!
//! Drives the walkthrough core without a window: a short script of key
//! presses and cursor offsets is replayed at a fixed 60 Hz clock, the way
//! a window loop would feed them. Set `RUST_LOG=debug` to see jump and
//! proximity events, `RUST_LOG=trace` for every frame.
//!
//! Script:
//! - walk toward the teapot (proximity kicks in)
//! - turn right while strafing, then sprint
//! - jump on the spot
//! - walk into the north wall
//! - ESC: Exit

use std::path::PathBuf;
use std::process::ExitCode;

use winit::keyboard::KeyCode;

use walkthrough_engine::{FrameStatus, Scene, WalkthroughConfig, WalkthroughSession};

/// Fixed simulation rate.
const TICK_RATE: f32 = 60.0;

/// One scripted action, applied at the start of its time.
#[derive(Debug, Clone, Copy)]
enum Action {
    Press(KeyCode),
    Release(KeyCode),
    /// Cursor offset from the window centre held for the following frames
    Look(f64, f64),
}

/// `(time in seconds, action)`, sorted by time.
const SCRIPT: &[(f32, Action)] = &[
    (0.5, Action::Press(KeyCode::KeyW)),
    (1.4, Action::Release(KeyCode::KeyW)),
    (3.0, Action::Look(6.0, 0.0)),
    (3.0, Action::Press(KeyCode::KeyD)),
    (4.0, Action::Look(0.0, 0.0)),
    (4.0, Action::Release(KeyCode::KeyD)),
    (4.0, Action::Press(KeyCode::ShiftLeft)),
    (4.0, Action::Press(KeyCode::KeyW)),
    (5.0, Action::Release(KeyCode::ShiftLeft)),
    (5.0, Action::Release(KeyCode::KeyW)),
    (5.5, Action::Press(KeyCode::Space)),
    (5.6, Action::Release(KeyCode::Space)),
    (7.0, Action::Look(-12.0, 0.0)),
    (7.5, Action::Look(0.0, 0.0)),
    (7.5, Action::Press(KeyCode::KeyW)),
    (11.0, Action::Release(KeyCode::KeyW)),
    (11.5, Action::Press(KeyCode::Escape)),
];

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match WalkthroughConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => WalkthroughConfig::default(),
    };

    let mut session = WalkthroughSession::new(config, Scene::arena());
    let center = session.input_mut().cursor.center();
    let (mut cursor_x, mut cursor_y) = (center.x as f64, center.y as f64);

    let end = SCRIPT.last().map_or(0.0, |(time, _)| *time) + 1.0;
    let ticks = (end * TICK_RATE).ceil() as u64;
    let mut next_action = 0;

    for tick in 1..=ticks {
        let now = tick as f32 / TICK_RATE;

        while let Some((time, action)) = SCRIPT.get(next_action) {
            if *time > now {
                break;
            }
            match *action {
                Action::Press(code) => {
                    session.input_mut().keyboard.handle_winit_key(code, true);
                }
                Action::Release(code) => {
                    session.input_mut().keyboard.handle_winit_key(code, false);
                }
                Action::Look(dx, dy) => {
                    cursor_x = center.x as f64 + dx;
                    cursor_y = center.y as f64 + dy;
                }
            }
            next_action += 1;
        }

        if session.frame(now, cursor_x, cursor_y) == FrameStatus::ExitRequested {
            break;
        }

        if tick % TICK_RATE as u64 == 0 {
            let camera = session.camera();
            log::info!(
                "t={:.0}s eye=({:.2}, {:.2}, {:.2}) yaw={:.2} pitch={:.2} fov={:.0} airborne={} proximity={}",
                now,
                camera.eye.x,
                camera.eye.y,
                camera.eye.z,
                camera.yaw,
                camera.pitch,
                camera.fov,
                session.jump().is_airborne(),
                session.proximity().in_proximity()
            );
        }
    }

    let camera = session.camera();
    log::info!(
        "walkthrough finished after {} frames at ({:.2}, {:.2}, {:.2}), {} draws",
        session.frames(),
        camera.eye.x,
        camera.eye.y,
        camera.eye.z,
        session.draw_list().len()
    );
    ExitCode::SUCCESS
}
