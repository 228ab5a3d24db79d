// SPDX-License-Identifier: MPL-2.0
//! Toolkit-free input vocabulary.
//!
//! Presentation layers translate native keyboard events into [`KeyPress`]
//! values; the gallery only ever sees these and the [`Command`]s they map to.

/// A key press, reduced to what the gallery reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    ArrowLeft,
    ArrowRight,
    Escape,
    /// A printable character, as typed.
    Character(char),
    /// Any other key.
    Other,
}

/// A state machine transition requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    Close,
}

impl Command {
    /// Maps a key press to its command.
    ///
    /// `ArrowLeft`/`h` go back, `ArrowRight`/`l` go forward, `Escape` closes.
    /// Letters match lowercase only.
    #[must_use]
    pub fn from_key(key: KeyPress) -> Option<Self> {
        match key {
            KeyPress::ArrowLeft | KeyPress::Character('h') => Some(Command::Previous),
            KeyPress::ArrowRight | KeyPress::Character('l') => Some(Command::Next),
            KeyPress::Escape => Some(Command::Close),
            KeyPress::Character(_) | KeyPress::Other => None,
        }
    }
}

/// Clickable controls of the overlay box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Close,
    Previous,
    Next,
    Download,
}

impl Control {
    /// Controls in display order.
    pub const ALL: [Control; 4] = [
        Control::Previous,
        Control::Close,
        Control::Download,
        Control::Next,
    ];

    /// The navigation command bound to this control, if any.
    ///
    /// `Download` is not a state transition and has none.
    #[must_use]
    pub fn command(self) -> Option<Command> {
        match self {
            Control::Close => Some(Command::Close),
            Control::Previous => Some(Command::Previous),
            Control::Next => Some(Command::Next),
            Control::Download => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_vim_keys_navigate() {
        assert_eq!(Command::from_key(KeyPress::ArrowLeft), Some(Command::Previous));
        assert_eq!(Command::from_key(KeyPress::Character('h')), Some(Command::Previous));
        assert_eq!(Command::from_key(KeyPress::ArrowRight), Some(Command::Next));
        assert_eq!(Command::from_key(KeyPress::Character('l')), Some(Command::Next));
    }

    #[test]
    fn uppercase_letters_do_not_navigate() {
        assert_eq!(Command::from_key(KeyPress::Character('H')), None);
        assert_eq!(Command::from_key(KeyPress::Character('L')), None);
    }

    #[test]
    fn escape_closes() {
        assert_eq!(Command::from_key(KeyPress::Escape), Some(Command::Close));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(Command::from_key(KeyPress::Character('x')), None);
        assert_eq!(Command::from_key(KeyPress::Other), None);
    }

    #[test]
    fn download_control_has_no_command() {
        assert_eq!(Control::Download.command(), None);
        assert_eq!(Control::Close.command(), Some(Command::Close));
    }
}
