#![forbid(unsafe_code)]

//! Convenience re-exports for applications building on flowtui.

pub use flowtui_core::{
    Component, DefaultKeyMatcher, Focusable, KeyCode, KeyEvent, KeyEventKind, KeyMatcher,
    LogicalKey, MockTerminal, Modifiers, Terminal, TerminalError,
};
#[cfg(feature = "crossterm")]
pub use flowtui_core::ProcessTerminal;
pub use flowtui_render::{
    Anchor, InputListener, InputListenerId, ListenerOutcome, Margin, OverlayId, OverlayOptions,
    RenderError, Renderer, RendererOptions, WidthSpec,
};
pub use flowtui_text::{slice_by_column, truncate_to_width, visible_width, wrap_text_with_ansi};
pub use flowtui_widgets::{BorderSet, BorderedBox, Container, Input, Padding, SelectList, Spacer, Text};

#[cfg(feature = "crossterm")]
pub use crate::app::App;
