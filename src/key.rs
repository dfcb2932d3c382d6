//! Key events as seen by modes.
//!
//! Keymaps bind physical key codes. Every printable character arrives as
//! [`Key::Rune`] with the character carried alongside, so a mode binds one
//! handler for "any printable key" and inspects [`KeyEvent::char`].

/// Physical key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any printable character; see [`KeyEvent::char`].
    Rune,
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Control chord with a lowercase ASCII letter, e.g. `Ctrl('w')`.
    Ctrl(char),
    /// Function key `F1`..`F12`.
    F(u8),
}

/// A single key press delivered to the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    key: Key,
    rune: Option<char>,
}

impl KeyEvent {
    /// A non-printable key press.
    pub fn new(key: Key) -> Self {
        Self { key, rune: None }
    }

    /// A printable character press.
    pub fn rune(ch: char) -> Self {
        Self {
            key: Key::Rune,
            rune: Some(ch),
        }
    }

    /// A control chord; the letter is normalized to lowercase.
    pub fn ctrl(ch: char) -> Self {
        Self::new(Key::Ctrl(ch.to_ascii_lowercase()))
    }

    pub fn key(&self) -> Key {
        self.key
    }

    /// The typed character for [`Key::Rune`] events.
    pub fn char(&self) -> Option<char> {
        self.rune
    }

    /// True for Escape or Ctrl-C, the two cancel chords.
    pub fn is_cancel(&self) -> bool {
        matches!(self.key, Key::Escape | Key::Ctrl('c'))
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rune_events_carry_character() {
        let ev = KeyEvent::rune(':');
        assert_eq!(ev.key(), Key::Rune);
        assert_eq!(ev.char(), Some(':'));
    }

    #[test]
    fn ctrl_chords_normalize_case() {
        assert_eq!(KeyEvent::ctrl('W').key(), Key::Ctrl('w'));
        assert!(KeyEvent::ctrl('C').is_cancel());
        assert!(KeyEvent::new(Key::Escape).is_cancel());
        assert!(!KeyEvent::new(Key::Enter).is_cancel());
    }

    #[test]
    fn plain_keys_convert_without_character() {
        let ev = KeyEvent::from(Key::Tab);
        assert_eq!(ev, KeyEvent::new(Key::Tab));
        assert_eq!(ev.char(), None);
    }
}
