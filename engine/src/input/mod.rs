//! Input Module
//!
//! Platform-agnostic keyboard and cursor state, reduced once per frame to a
//! [`FrameInput`] snapshot for the movement controller.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkthrough_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // Event loop
//! input.keyboard.handle_key(KeyCode::W, true);
//!
//! // Frame update: sample the cursor, then warp it back to the centre
//! let frame = input.snapshot(cursor_x, cursor_y);
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse_state;

use glam::Vec2;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
pub use mouse_state::CenteredCursor;

/// Everything the movement controller reads from input in one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Key-down state at sample time
    pub keys: MovementKeys,
    /// Cursor offset from the window centre in pixels (+y is down)
    pub mouse_delta: Vec2,
}

impl FrameInput {
    /// Whether this frame asks to leave the walkthrough.
    #[inline]
    pub fn wants_exit(&self) -> bool {
        self.keys.escape
    }
}

/// Combined keyboard and cursor state.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub cursor: CenteredCursor,
}

impl InputState {
    /// Create a new input state with default bindings and an 1024x768 window centre.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input state for a window of the given size, using `bindings`.
    pub fn for_window(width: u32, height: u32, bindings: KeyBindings) -> Self {
        Self {
            keyboard: KeyboardState::with_bindings(bindings),
            cursor: CenteredCursor::for_window(width, height),
        }
    }

    /// Sample the cursor at `(x, y)` and snapshot the held keys.
    pub fn snapshot(&mut self, x: f64, y: f64) -> FrameInput {
        FrameInput {
            keys: self.keyboard.movement,
            mouse_delta: self.cursor.sample(x, y),
        }
    }
}
