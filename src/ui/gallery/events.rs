// SPDX-License-Identifier: MPL-2.0
//! Translation of native iced events into gallery input.

use crate::domain::input::KeyPress;
use iced::keyboard::{self, key::Named, Key};

/// Reduces an iced key to the gallery's key vocabulary.
#[must_use]
pub fn key_press(key: &Key) -> KeyPress {
    match key {
        Key::Named(Named::ArrowLeft) => KeyPress::ArrowLeft,
        Key::Named(Named::ArrowRight) => KeyPress::ArrowRight,
        Key::Named(Named::Escape) => KeyPress::Escape,
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyPress::Character(c),
                _ => KeyPress::Other,
            }
        }
        _ => KeyPress::Other,
    }
}

/// Extracts a key press from a keyboard event.
///
/// Presses with Ctrl, Alt or Logo held belong to shortcuts and are skipped.
#[must_use]
pub fn from_keyboard_event(event: &keyboard::Event) -> Option<KeyPress> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. }
            if !(modifiers.control() || modifiers.alt() || modifiers.logo()) =>
        {
            Some(key_press(key))
        }
        _ => None,
    }
}
