#![forbid(unsafe_code)]

//! Bordered panel with an optional title row.

use std::cell::RefCell;
use std::rc::Rc;

use flowtui_core::Component;
use flowtui_text::{truncate_to_width, visible_width};

use crate::border_set::BorderSet;
use crate::container::Container;

/// A box-drawn frame around a vertically stacked set of children, with an
/// optional title row separated from the content by a horizontal rule.
pub struct BorderedBox {
    inner: Container,
    border: BorderSet,
    title: Option<String>,
    min_width: Option<usize>,
    max_width: Option<usize>,
}

impl Default for BorderedBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BorderedBox {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Container::new(),
            border: BorderSet::default(),
            title: None,
            min_width: None,
            max_width: None,
        }
    }

    #[must_use]
    pub fn with_border(mut self, border: BorderSet) -> Self {
        self.border = border;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_min_width(mut self, min_width: usize) -> Self {
        self.min_width = Some(min_width);
        self
    }

    #[must_use]
    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn push(&mut self, child: Rc<RefCell<dyn Component>>) {
        self.inner.push(child);
    }

    /// Replace the title shown in the title row, invalidating the cache the
    /// title accounting depends on (none is kept here, so this is just a
    /// setter — present for symmetry with `Text::set_content`).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    fn effective_width(&self, available: usize) -> usize {
        let mut width = available;
        if let Some(max) = self.max_width {
            width = width.min(max);
        }
        if let Some(min) = self.min_width {
            width = width.max(min.min(available));
        }
        width
    }
}

impl Component for BorderedBox {
    fn render(&self, width: usize) -> Vec<String> {
        let total_width = self.effective_width(width);
        let inner_width = total_width.saturating_sub(2);
        let b = self.border;

        let mut lines = Vec::new();
        lines.push(format!(
            "{}{}{}",
            b.top_left,
            b.horizontal.to_string().repeat(inner_width),
            b.top_right
        ));

        if let Some(title) = &self.title {
            // Title width accounting uses visible width, not byte length,
            // so multi-byte titles truncate at the right column.
            let title_text = truncate_to_width(title, inner_width.saturating_sub(2), "…", false);
            let title_line = format!(" {title_text} ");
            let padded = truncate_to_width(&title_line, inner_width, "", true);
            lines.push(format!("{}{}{}", b.vertical, padded, b.vertical));
            lines.push(format!(
                "{}{}{}",
                b.left_tee,
                b.horizontal.to_string().repeat(inner_width),
                b.right_tee
            ));
        }

        let body = self.inner.render_children(inner_width);
        for line in body {
            let padded = truncate_to_width(&line, inner_width, "", true);
            debug_assert!(visible_width(&padded) <= inner_width);
            lines.push(format!("{}{}{}", b.vertical, padded, b.vertical));
        }

        lines.push(format!(
            "{}{}{}",
            b.bottom_left,
            b.horizontal.to_string().repeat(inner_width),
            b.bottom_right
        ));

        lines
    }

    fn invalidate(&mut self) {
        self.inner.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Text;
    use std::cell::RefCell;

    #[test]
    fn draws_corners_and_rule() {
        let mut b = BorderedBox::new();
        b.push(Rc::new(RefCell::new(Text::new("hi").with_wrap(false))));
        let lines = b.render(10);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[0].ends_with('┐'));
        assert!(lines.last().unwrap().starts_with('└'));
    }

    #[test]
    fn title_row_gets_a_separator_rule() {
        let mut b = BorderedBox::new().with_title("Title");
        b.push(Rc::new(RefCell::new(Text::new("body").with_wrap(false))));
        let lines = b.render(20);
        assert!(lines[1].contains("Title"));
        assert!(lines[2].starts_with('├'));
        assert!(lines[2].ends_with('┤'));
    }

    #[test]
    fn inner_width_is_clamped_by_max_width() {
        let mut b = BorderedBox::new().with_max_width(10);
        b.push(Rc::new(RefCell::new(Text::new("x").with_wrap(false))));
        let lines = b.render(40);
        assert_eq!(visible_width(&lines[0]), 10);
    }

    #[test]
    fn inner_width_is_clamped_by_available_columns_even_with_min_width() {
        let mut b = BorderedBox::new().with_min_width(50);
        b.push(Rc::new(RefCell::new(Text::new("x").with_wrap(false))));
        let lines = b.render(20);
        assert_eq!(visible_width(&lines[0]), 20);
    }
}
