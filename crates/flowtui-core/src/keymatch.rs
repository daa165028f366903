#![forbid(unsafe_code)]

//! Named-key matching: a side collaborator that answers "does this decoded
//! key chunk match this logical key" without the caller having to
//! destructure [`crate::event::KeyEvent`] itself.
//!
//! Grounded on the matching style of `ftui-core::keybinding::ActionMapper`,
//! trimmed to a single stateless predicate — flowtui does not need
//! timeout-based sequence detection (Esc-Esc and similar), only a named-key
//! comparison.

use crate::event::{KeyCode, KeyEvent, Modifiers};

/// A key identified by name rather than by raw [`KeyCode`]/[`Modifiers`]
/// pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    Escape,
    Enter,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    F(u8),
    /// A plain printable character with no modifiers.
    Char(char),
    /// `Ctrl` + a character.
    Ctrl(char),
    /// `Alt` + a character.
    Alt(char),
    /// `Shift` + a character.
    Shift(char),
    /// A "doubled" combination — both `Ctrl` and `Alt` held with a
    /// character.
    CtrlAlt(char),
}

/// Answers whether a decoded key event matches a [`LogicalKey`].
///
/// The core never parses escape bytes itself; this trait is the seam
/// between whatever decodes the byte stream and the widgets/renderer that
/// only want to ask "was Escape pressed?".
pub trait KeyMatcher {
    fn matches(&self, event: &KeyEvent, logical: LogicalKey) -> bool;
}

/// The stock [`KeyMatcher`] implementation used by the built-in widgets and
/// the renderer's default input listeners.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultKeyMatcher;

impl KeyMatcher for DefaultKeyMatcher {
    fn matches(&self, event: &KeyEvent, logical: LogicalKey) -> bool {
        match logical {
            LogicalKey::Escape => event.code == KeyCode::Escape && event.modifiers.is_empty(),
            LogicalKey::Enter => event.code == KeyCode::Enter && event.modifiers.is_empty(),
            LogicalKey::Tab => event.code == KeyCode::Tab && event.modifiers.is_empty(),
            LogicalKey::BackTab => event.code == KeyCode::BackTab,
            LogicalKey::Backspace => event.code == KeyCode::Backspace,
            LogicalKey::Delete => event.code == KeyCode::Delete,
            LogicalKey::Home => event.code == KeyCode::Home,
            LogicalKey::End => event.code == KeyCode::End,
            LogicalKey::PageUp => event.code == KeyCode::PageUp,
            LogicalKey::PageDown => event.code == KeyCode::PageDown,
            LogicalKey::Up => event.code == KeyCode::Up,
            LogicalKey::Down => event.code == KeyCode::Down,
            LogicalKey::Left => event.code == KeyCode::Left,
            LogicalKey::Right => event.code == KeyCode::Right,
            LogicalKey::F(n) => event.code == KeyCode::F(n),
            LogicalKey::Char(c) => event.code == KeyCode::Char(c) && event.modifiers.is_empty(),
            LogicalKey::Ctrl(c) => {
                event.code == KeyCode::Char(c) && event.modifiers == Modifiers::CTRL
            }
            LogicalKey::Alt(c) => {
                event.code == KeyCode::Char(c) && event.modifiers == Modifiers::ALT
            }
            LogicalKey::Shift(c) => {
                event.code == KeyCode::Char(c) && event.modifiers == Modifiers::SHIFT
            }
            LogicalKey::CtrlAlt(c) => {
                event.code == KeyCode::Char(c)
                    && event.modifiers == Modifiers::CTRL | Modifiers::ALT
            }
        }
    }
}
