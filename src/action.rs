//! Keyboard actions.
//!
//! Layer controls are their own [`Action`] variants rather than keycodes in a
//! reserved numeric range, so a key stroke and a layer switch can never
//! collide in the keymap tables.

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A single basic action the keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, forwarded to the host's HID path.
    Key(KeyCode),
    /// Key stroke with a modifier combination held around it.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held.
    LayerOn(u8),
    /// Toggle a layer on key release.
    LayerToggle(u8),
    /// Replace the default layer.
    DefaultLayer(u8),
}

/// A KeyAction is the entry at a keymap position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, the next active layer below will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
}
