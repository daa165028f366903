#![forbid(unsafe_code)]

//! Canonical keyboard event types.
//!
//! flowtui consumes input as already-decoded key chunks (see
//! [`crate::keymatch`]); this module only defines the shape of a decoded
//! event, not the byte-level parser. Mouse, paste, and clipboard reporting
//! are deliberately not modelled: the renderer only ever dispatches
//! keyboard input to the focused component.

use bitflags::bitflags;

/// A single decoded keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
    /// Whether this is a press, a Kitty-protocol repeat, or a release.
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and `Press` kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Attach a specific kind (used when the Kitty protocol distinguishes
    /// press/repeat/release).
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// True if this is a press of the given character, ignoring modifiers.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    #[must_use]
    pub const fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

/// Key codes the renderer and built-in widgets recognize by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular printable character.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    /// Shift+Tab.
    BackTab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Function key, F1 through F12.
    F(u8),
}

/// Whether a key event is a fresh press, a held-key repeat, or a release.
///
/// Repeat and release are only distinguishable when the terminal speaks the
/// Kitty keyboard protocol; otherwise every event is reported as `Press`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const NONE  = 0b0000;
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_char_ignores_modifiers() {
        let event = KeyEvent::new(KeyCode::Char('q')).with_modifiers(Modifiers::CTRL);
        assert!(event.is_char('q'));
        assert!(!event.is_char('x'));
    }

    #[test]
    fn combined_modifiers() {
        let event =
            KeyEvent::new(KeyCode::Char('s')).with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
        assert!(event.ctrl());
        assert!(event.shift());
        assert!(!event.alt());
    }

    #[test]
    fn kind_defaults_to_press() {
        assert_eq!(KeyEvent::new(KeyCode::Enter).kind, KeyEventKind::Press);
    }

    #[test]
    fn with_kind_overrides() {
        let event = KeyEvent::new(KeyCode::Enter).with_kind(KeyEventKind::Release);
        assert_eq!(event.kind, KeyEventKind::Release);
    }

    #[test]
    fn modifiers_default_is_none() {
        assert_eq!(Modifiers::default(), Modifiers::NONE);
    }

    #[test]
    fn function_keys_carry_their_number() {
        assert_eq!(KeyEvent::new(KeyCode::F(5)).code, KeyCode::F(5));
    }
}
