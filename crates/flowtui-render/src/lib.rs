#![forbid(unsafe_code)]

//! The differential renderer: frame lifecycle, overlays, and the built-in
//! main loop for flowtui.
//!
//! # Role in flowtui
//! `flowtui-render` owns the one piece of state that must survive across
//! frames ([`state::RendererState`]) and the one piece of logic that knows
//! how to turn a component tree into a minimal terminal diff
//! ([`renderer::Renderer::render_frame`]). It depends on `flowtui-core` for
//! the `Terminal`/`Component` protocol and on `flowtui-text` for ANSI-aware
//! width and slicing; `flowtui-widgets` and the `flowtui` facade build on
//! top of this crate without needing to know how the diff algorithm works.

pub mod error;
pub mod input;
pub mod options;
pub mod overlay;
pub mod renderer;
pub mod state;

pub use error::RenderError;
pub use input::{InputListener, InputListenerId, ListenerOutcome};
pub use options::RendererOptions;
pub use overlay::{Anchor, Margin, OverlayEntry, OverlayId, OverlayOptions, ResolvedLayout, WidthSpec};
pub use renderer::Renderer;
pub use state::RendererState;
