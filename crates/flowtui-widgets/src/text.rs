#![forbid(unsafe_code)]

//! Word-wrapped text block.

use std::cell::RefCell;

use flowtui_core::Component;
use flowtui_text::{truncate_to_width, visible_width, wrap_text_with_ansi};

use crate::padding::Padding;

/// A function that rewrites a full-width styled line, typically to apply a
/// background color across it. Stored as a boxed closure, single-owner like
/// the other callback slots in this crate.
pub type BackgroundFn = Box<dyn Fn(&str) -> String>;

/// Word-wrapped, padded text block.
///
/// Caches its last render keyed by `width`; [`Component::invalidate`] drops
/// the cache.
pub struct Text {
    content: String,
    wrap: bool,
    padding: Padding,
    background: Option<BackgroundFn>,
    cache: RefCell<Option<(usize, Vec<String>)>>,
}

impl Text {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            wrap: true,
            padding: Padding::default(),
            background: None,
            cache: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
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

    /// Replace the text content, invalidating the render cache.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        Component::invalidate(self);
    }
}

impl Component for Text {
    fn render(&self, width: usize) -> Vec<String> {
        if let Some((cached_width, lines)) = self.cache.borrow().as_ref() {
            if *cached_width == width {
                return lines.clone();
            }
        }

        let inner_width = width
            .saturating_sub(self.padding.left)
            .saturating_sub(self.padding.right);

        let body: Vec<String> = if self.wrap {
            wrap_text_with_ansi(&self.content, inner_width)
        } else {
            self.content
                .lines()
                .map(|line| truncate_to_width(line, inner_width, "…", false))
                .collect()
        };

        let left_pad = " ".repeat(self.padding.left);
        let right_pad = " ".repeat(self.padding.right);
        let blank = " ".repeat(width);

        let mut lines = Vec::with_capacity(self.padding.top + body.len() + self.padding.bottom);
        for _ in 0..self.padding.top {
            lines.push(apply_background(&blank, &self.background));
        }
        for line in &body {
            let filled = truncate_to_width(line, inner_width, "", true);
            let full = format!("{left_pad}{filled}{right_pad}");
            debug_assert!(visible_width(&full) <= width);
            lines.push(apply_background(&full, &self.background));
        }
        for _ in 0..self.padding.bottom {
            lines.push(apply_background(&blank, &self.background));
        }

        *self.cache.borrow_mut() = Some((width, lines.clone()));
        lines
    }

    fn invalidate(&mut self) {
        *self.cache.borrow_mut() = None;
    }
}

fn apply_background(line: &str, background: &Option<BackgroundFn>) -> String {
    match background {
        Some(f) => f(line),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_to_width() {
        let text = Text::new("one two three four");
        let lines = text.render(8);
        for line in &lines {
            assert!(visible_width(line) <= 8);
        }
        assert!(lines.len() > 1);
    }

    #[test]
    fn padding_reduces_wrap_width_but_keeps_full_line_width() {
        let text = Text::new("hello world").with_padding(Padding::all(2));
        let lines = text.render(10);
        for line in &lines {
            assert_eq!(visible_width(line), 10);
        }
        // inner width is 10 - 2 - 2 = 6, so "hello world" must wrap.
        assert!(lines.len() >= 2);
    }

    #[test]
    fn background_covers_full_width_including_padding() {
        let text = Text::new("hi")
            .with_padding(Padding::all(1))
            .with_background(|line| format!("[{line}]"));
        let lines = text.render(6);
        for line in &lines {
            assert!(line.starts_with('[') && line.ends_with(']'));
        }
    }

    #[test]
    fn cache_is_reused_for_same_width() {
        let text = Text::new("cached");
        let first = text.render(20);
        let second = text.render(20);
        assert_eq!(first, second);
    }

    #[test]
    fn invalidate_clears_cache() {
        let mut text = Text::new("before");
        let _ = text.render(20);
        Component::invalidate(&mut text);
        text.set_content("after");
        let lines = text.render(20);
        assert!(lines.iter().any(|l| l.contains("after")));
    }
}
