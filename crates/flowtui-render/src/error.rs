#![forbid(unsafe_code)]

//! Renderer error taxonomy.

use flowtui_core::TerminalError;
use thiserror::Error;

/// Failure surfaced by the renderer's main-loop primitives.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The terminal device failed; not recoverable by the library.
    #[error(transparent)]
    Terminal(#[from] TerminalError),

    /// A registered callback (e.g. an `Input`'s `on_submit`) raised while
    /// handling input; propagated to the caller's loop without corrupting
    /// renderer state.
    #[error("input callback failed: {0}")]
    Callback(String),
}
