#![forbid(unsafe_code)]
#![cfg(feature = "crossterm")]

//! Thin convenience wrapper pairing [`flowtui_render::Renderer`] with the
//! real [`flowtui_core::ProcessTerminal`], matching the "construct once,
//! reuse across screen switches" discipline.

use std::cell::RefCell;
use std::rc::Rc;

use flowtui_core::{Component, Focusable, KeyEvent, ProcessTerminal};
use flowtui_render::{InputListener, InputListenerId, OverlayId, OverlayOptions, RenderError, Renderer, RendererOptions};

/// A ready-to-run application: a [`Renderer`] over the process's real
/// terminal, rooted at a caller-supplied component tree.
pub struct App {
    renderer: Renderer<ProcessTerminal>,
}

impl App {
    /// Open the process terminal and build a renderer rooted at `root`.
    pub fn new(root: Rc<RefCell<dyn Component>>) -> Result<Self, RenderError> {
        Self::with_options(root, RendererOptions::default())
    }

    /// As [`App::new`], with explicit renderer options.
    pub fn with_options(
        root: Rc<RefCell<dyn Component>>,
        options: RendererOptions,
    ) -> Result<Self, RenderError> {
        let terminal = ProcessTerminal::new();
        Ok(Self {
            renderer: Renderer::new(terminal, root, options),
        })
    }

    /// Run the built-in main loop until `should_continue` returns `false`.
    pub fn run_until(&mut self, should_continue: impl FnMut() -> bool) -> Result<(), RenderError> {
        self.renderer.run(should_continue)
    }

    /// Render exactly one frame; for callers driving their own loop instead
    /// of [`App::run_until`].
    pub fn render_frame(&mut self) -> Result<(), RenderError> {
        self.renderer.render_frame()
    }

    /// Route one decoded input chunk (listeners, then the focused
    /// component).
    pub fn handle_input(&mut self, event: &KeyEvent) -> bool {
        self.renderer.handle_input(event)
    }

    pub fn set_focus(&mut self, target: &Rc<RefCell<dyn Focusable>>) {
        self.renderer.set_focus(target);
    }

    pub fn clear_focus(&mut self) {
        self.renderer.clear_focus();
    }

    pub fn add_input_listener(&mut self, listener: InputListener) -> InputListenerId {
        self.renderer.add_input_listener(listener)
    }

    pub fn remove_input_listener(&mut self, id: InputListenerId) {
        self.renderer.remove_input_listener(id);
    }

    pub fn show_overlay(&mut self, root: Rc<RefCell<dyn Focusable>>, options: OverlayOptions) -> OverlayId {
        self.renderer.show_overlay(root, options)
    }

    pub fn hide_overlay(&mut self, id: OverlayId) {
        self.renderer.hide_overlay(id);
    }

    /// Leave raw mode and restore the cursor. Idempotent; also runs
    /// automatically when `run_until` returns an error.
    pub fn stop(&mut self) -> Result<(), RenderError> {
        self.renderer.stop()
    }
}
