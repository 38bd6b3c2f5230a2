//! Keyboard Input Module
//!
//! Contains keyboard state tracking for the walkthrough's movement keys.
//! Decoupled from winit to use generic key codes; [`KeyCode::from_winit`]
//! converts physical winit key codes at the boundary.

use serde::{Deserialize, Serialize};

use super::bindings::{InputAction, KeyBindings};

/// Generic key codes, independent of windowing system.
///
/// Only keys the walkthrough can bind are listed; everything else maps to
/// `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    Escape,

    // Arrow keys (available for rebinding)
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Convert a winit physical key code.
    pub fn from_winit(code: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as Winit;

        match code {
            Winit::KeyW => Self::W,
            Winit::KeyA => Self::A,
            Winit::KeyS => Self::S,
            Winit::KeyD => Self::D,
            Winit::Space => Self::Space,
            Winit::ShiftLeft => Self::ShiftLeft,
            Winit::ShiftRight => Self::ShiftRight,
            Winit::Escape => Self::Escape,
            Winit::ArrowUp => Self::ArrowUp,
            Winit::ArrowDown => Self::ArrowDown,
            Winit::ArrowLeft => Self::ArrowLeft,
            Winit::ArrowRight => Self::ArrowRight,
            _ => Self::Unknown,
        }
    }
}

impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(code: winit::keyboard::KeyCode) -> Self {
        Self::from_winit(code)
    }
}

/// Key-down state of every walkthrough action for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// Move along the camera front
    pub forward: bool,
    /// Move against the camera front
    pub backward: bool,
    /// Strafe against the camera right vector
    pub left: bool,
    /// Strafe along the camera right vector
    pub right: bool,
    /// Speed multiplier and wide field of view
    pub sprint: bool,
    /// Jump (acts on the rising edge only)
    pub jump: bool,
    /// Request to leave the walkthrough
    pub escape: bool,
}

impl MovementKeys {
    /// Set the state of the key bound to `action`.
    pub fn set_action(&mut self, action: InputAction, pressed: bool) {
        match action {
            InputAction::MoveForward => self.forward = pressed,
            InputAction::MoveBack => self.backward = pressed,
            InputAction::MoveLeft => self.left = pressed,
            InputAction::MoveRight => self.right = pressed,
            InputAction::Sprint => self.sprint = pressed,
            InputAction::Jump => self.jump = pressed,
            InputAction::Escape => self.escape = pressed,
        }
    }
}

/// Keyboard state: held actions plus the bindings used to resolve key events.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Movement key states
    pub movement: MovementKeys,
    /// Key to action mapping
    pub bindings: KeyBindings,
}

impl KeyboardState {
    /// Create a new keyboard state with default bindings and all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keyboard state resolving keys through `bindings`.
    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            movement: MovementKeys::default(),
            bindings,
        }
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key is bound to an action.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match self.bindings.action_for(key) {
            Some(action) => {
                self.movement.set_action(action, pressed);
                true
            }
            None => false,
        }
    }

    /// Handle a winit key event.
    pub fn handle_winit_key(&mut self, code: winit::keyboard::KeyCode, pressed: bool) -> bool {
        self.handle_key(KeyCode::from_winit(code), pressed)
    }
}
