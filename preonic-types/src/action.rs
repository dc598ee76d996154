//! Keyboard actions.
//!
//! An [`Action`] is a single thing a key does: send a keycode, hold modifiers,
//! or run one of the keymap's own behaviors. A [`KeyAction`] is what is stored
//! at a position of the layout: a single action, a tap/hold pair, or one of the
//! two placeholders (`No` and `Transparent`).

use serde::{Deserialize, Serialize};

use crate::keycode::{CustomKeyCode, FrameworkKey, KeyCode};
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
    /// General tap/hold action: (tap_action, hold_action). Timing is decided by the host.
    TapHold(Action, Action),
}

impl KeyAction {
    /// Returns the single action, if the key action is a single action
    pub fn single(self) -> Option<Action> {
        match self {
            KeyAction::Single(action) => Some(action),
            _ => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke
    Key(KeyCode),
    /// Hold a modifier combination
    Modifier(ModifierCombination),
    /// Key stroke with modifier combination triggered, e.g. `!` is shifted `1`.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Keycode owned by this keymap
    Custom(CustomKeyCode),
    /// Keycode implemented by the host firmware
    Framework(FrameworkKey),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::keycode::HidKeyCode;

    #[test]
    fn test_single_action() {
        let a = KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)));
        assert_eq!(a.single(), Some(Action::Key(KeyCode::Hid(HidKeyCode::A))));
        assert_eq!(KeyAction::Transparent.single(), None);
        assert_eq!(KeyAction::No.single(), None);
    }
}
