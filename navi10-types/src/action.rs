//! Keyboard actions.
//!
//! - [`Action`] - Single operations that the keyboard sends
//! - [`KeyAction`] - What a key position does, stored in the keymap

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
    /// Tap dance action, references a tap dance registration by index.
    TapDance(u8),
}

impl KeyAction {
    /// Keycode emitted by this action, if any
    pub fn key_code(&self) -> Option<KeyCode> {
        match self {
            KeyAction::Single(action) => Some(action.key_code()),
            _ => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
}

impl Action {
    pub fn key_code(&self) -> KeyCode {
        match self {
            Action::Key(k) | Action::KeyWithModifier(k, _) => *k,
        }
    }
}
