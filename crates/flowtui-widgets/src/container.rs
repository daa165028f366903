#![forbid(unsafe_code)]

//! Vertical-stack container, the `Box` primitive.
//!
//! `Container` is a concrete struct, not a trait: composable containers own
//! their children directly rather than adding another layer of dynamic
//! dispatch. It exclusively owns its children and renders them by vertical
//! concatenation.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use flowtui_core::Component;
use flowtui_text::visible_width;

use crate::padding::Padding;
use crate::text::BackgroundFn;

/// Vertically stacks its children, applying padding and an optional
/// background wrapper.
pub struct Container {
    children: Vec<Rc<RefCell<dyn Component>>>,
    padding: Padding,
    background: Option<BackgroundFn>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            padding: Padding::default(),
            background: None,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_background(mut self, background: impl Fn(&str) -> String + 'static) -> Self {
        self.background = Some(Box::new(background));
        self
    }

    pub fn push(&mut self, child: Rc<RefCell<dyn Component>>) {
        self.children.push(child);
    }

    #[must_use]
    pub fn children(&self) -> &[Rc<RefCell<dyn Component>>] {
        &self.children
    }

    /// Render children into `inner_width`, isolating a panicking child to a
    /// single placeholder line rather than losing the whole frame.
    pub(crate) fn render_children(&self, inner_width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        for child in &self.children {
            let child = child.clone();
            let rendered = panic::catch_unwind(AssertUnwindSafe(|| child.borrow().render(inner_width)));
            match rendered {
                Ok(child_lines) => lines.extend(child_lines),
                Err(_) => lines.push("<component render failed>".to_string()),
            }
        }
        lines
    }

    pub(crate) fn frame(&self, width: usize, body: Vec<String>) -> Vec<String> {
        let inner_width = width
            .saturating_sub(self.padding.left)
            .saturating_sub(self.padding.right);
        let left_pad = " ".repeat(self.padding.left);
        let right_pad = " ".repeat(self.padding.right);
        let blank = " ".repeat(width);

        let mut lines = Vec::with_capacity(self.padding.top + body.len() + self.padding.bottom);
        for _ in 0..self.padding.top {
            lines.push(apply_background(&blank, &self.background));
        }
        for line in body {
            let filled = flowtui_text::truncate_to_width(&line, inner_width, "", true);
            let full = format!("{left_pad}{filled}{right_pad}");
            debug_assert!(visible_width(&full) <= width);
            lines.push(apply_background(&full, &self.background));
        }
        for _ in 0..self.padding.bottom {
            lines.push(apply_background(&blank, &self.background));
        }
        lines
    }
}

fn apply_background(line: &str, background: &Option<BackgroundFn>) -> String {
    match background {
        Some(f) => f(line),
        None => line.to_string(),
    }
}

impl Component for Container {
    fn render(&self, width: usize) -> Vec<String> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("container_render", width, children = self.children.len()).entered();

        let inner_width = width
            .saturating_sub(self.padding.left)
            .saturating_sub(self.padding.right);
        let body = self.render_children(inner_width);
        self.frame(width, body)
    }

    fn invalidate(&mut self) {
        for child in &self.children {
            child.borrow_mut().invalidate();
        }
    }
}
