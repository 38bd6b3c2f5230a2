//! Input Bindings Module
//!
//! One physical key per walkthrough action, stored as a plain table so it
//! can be loaded from the `keys` section of the configuration file:
//!
//! ```json
//! { "keys": { "forward": "ArrowUp", "backward": "ArrowDown" } }
//! ```

use serde::{Deserialize, Serialize};

use super::KeyCode;

/// Logical input actions that a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveForward,
    MoveBack,
    MoveLeft,
    MoveRight,
    Sprint,
    Jump,
    Escape,
}

/// Key assigned to each action. Missing entries keep the WASD layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub sprint: KeyCode,
    pub jump: KeyCode,
    pub escape: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::W,
            backward: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
            sprint: KeyCode::ShiftLeft,
            jump: KeyCode::Space,
            escape: KeyCode::Escape,
        }
    }
}

impl KeyBindings {
    /// Action triggered by `key`.
    ///
    /// If a key is assigned to several actions the first in table order
    /// wins. `Unknown` never triggers anything.
    pub fn action_for(&self, key: KeyCode) -> Option<InputAction> {
        if key == KeyCode::Unknown {
            return None;
        }

        [
            (self.forward, InputAction::MoveForward),
            (self.backward, InputAction::MoveBack),
            (self.left, InputAction::MoveLeft),
            (self.right, InputAction::MoveRight),
            (self.sprint, InputAction::Sprint),
            (self.jump, InputAction::Jump),
            (self.escape, InputAction::Escape),
        ]
        .into_iter()
        .find_map(|(bound, action)| (bound == key).then_some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let bindings = KeyBindings::default();

        assert_eq!(bindings.action_for(KeyCode::W), Some(InputAction::MoveForward));
        assert_eq!(bindings.action_for(KeyCode::S), Some(InputAction::MoveBack));
        assert_eq!(bindings.action_for(KeyCode::A), Some(InputAction::MoveLeft));
        assert_eq!(bindings.action_for(KeyCode::D), Some(InputAction::MoveRight));
        assert_eq!(bindings.action_for(KeyCode::ShiftLeft), Some(InputAction::Sprint));
        assert_eq!(bindings.action_for(KeyCode::Space), Some(InputAction::Jump));
        assert_eq!(bindings.action_for(KeyCode::Escape), Some(InputAction::Escape));
        assert_eq!(bindings.action_for(KeyCode::ArrowUp), None);
    }

    #[test]
    fn test_reassigned_key_frees_old_one() {
        let bindings = KeyBindings {
            jump: KeyCode::ShiftRight,
            ..Default::default()
        };
        assert_eq!(bindings.action_for(KeyCode::ShiftRight), Some(InputAction::Jump));
        assert_eq!(bindings.action_for(KeyCode::Space), None);
    }

    #[test]
    fn test_shared_key_uses_table_order() {
        let bindings = KeyBindings {
            escape: KeyCode::W,
            ..Default::default()
        };
        assert_eq!(bindings.action_for(KeyCode::W), Some(InputAction::MoveForward));
    }

    #[test]
    fn test_unknown_never_binds() {
        let bindings = KeyBindings {
            jump: KeyCode::Unknown,
            ..Default::default()
        };
        assert_eq!(bindings.action_for(KeyCode::Unknown), None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let bindings: KeyBindings = serde_json::from_str(r#"{ "forward": "ArrowUp" }"#).unwrap();
        assert_eq!(bindings.forward, KeyCode::ArrowUp);
        assert_eq!(bindings.backward, KeyCode::S);
    }
}
