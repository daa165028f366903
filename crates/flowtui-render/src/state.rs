#![forbid(unsafe_code)]

//! Renderer state: everything that must survive across frames and whose
//! invariants the frame lifecycle in [`crate::renderer`] maintains.

use std::cell::RefCell;
use std::rc::Weak;

use flowtui_core::Focusable;

use crate::input::InputListenerId;
use crate::overlay::OverlayEntry;

/// Cross-frame renderer state, owned by [`crate::renderer::Renderer`].
///
/// Invariants maintained by `render_frame`:
/// - `hardware_cursor_row` is in `[0, term_height)` at the end of every frame.
/// - `max_lines_rendered >= final_lines.len()` always.
/// - `previous_lines` reflects exactly what the terminal believes is on
///   screen within the current viewport.
pub struct RendererState {
    pub previous_lines: Vec<String>,
    pub max_lines_rendered: usize,
    pub hardware_cursor_row: i64,
    pub emitted_scrollback_lines: usize,
    pub first_visible_row_previous: usize,
    pub last_terminal_size: Option<(u16, u16)>,
    pub force_full_redraw: bool,
    pub focus: Option<Weak<RefCell<dyn Focusable>>>,
    pub overlays: Vec<OverlayEntry>,
    pub input_listener_ids: Vec<InputListenerId>,
    pub(crate) next_overlay_id: u64,
    pub(crate) next_listener_id: u64,
}

impl Default for RendererState {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererState {
    /// A fresh state as it exists before the first frame is ever rendered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous_lines: Vec::new(),
            max_lines_rendered: 0,
            hardware_cursor_row: -1,
            emitted_scrollback_lines: 0,
            first_visible_row_previous: 0,
            last_terminal_size: None,
            force_full_redraw: true,
            focus: None,
            overlays: Vec::new(),
            input_listener_ids: Vec::new(),
            next_overlay_id: 0,
            next_listener_id: 0,
        }
    }

    /// Request that the next frame perform a full clear + redraw (e.g. on
    /// an explicit screen switch).
    pub fn request_full_redraw(&mut self) {
        self.force_full_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_forces_redraw_on_first_frame() {
        let state = RendererState::new();
        assert!(state.force_full_redraw);
        assert_eq!(state.max_lines_rendered, 0);
        assert_eq!(state.hardware_cursor_row, -1);
    }

    #[test]
    fn request_full_redraw_sets_flag() {
        let mut state = RendererState::new();
        state.force_full_redraw = false;
        state.request_full_redraw();
        assert!(state.force_full_redraw);
    }
}
