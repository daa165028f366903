#![forbid(unsafe_code)]

//! Terminal abstraction, key/event model, component protocol, and
//! cursor-marker codec for flowtui.
//!
//! # Role in flowtui
//! `flowtui-core` is the seam between the renderer (`flowtui-render`) and
//! an actual terminal device: it defines [`terminal::Terminal`] (consumed,
//! never a concrete I/O implementation opinion forced on callers),
//! [`event::KeyEvent`] and friends, the [`component::Component`] protocol
//! every widget implements, and the cursor-marker encoding the renderer
//! uses to place the hardware cursor. `flowtui-render` depends on this
//! crate; `flowtui-widgets` depends on it for the component/event types it
//! implements against.

pub mod component;
pub mod cursor_marker;
pub mod event;
pub mod keymatch;
pub mod mock;
#[cfg(feature = "crossterm")]
pub mod process_terminal;
pub mod terminal;

pub use component::{Component, Focusable};
pub use cursor_marker::{embed_cursor_marker, extract_cursor_marker};
pub use event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use keymatch::{DefaultKeyMatcher, KeyMatcher, LogicalKey};
pub use mock::MockTerminal;
#[cfg(feature = "crossterm")]
pub use process_terminal::ProcessTerminal;
pub use terminal::{RawModeGuard, Terminal, TerminalError};
