#![forbid(unsafe_code)]

//! Filterable, scrollable selection list.

use flowtui_core::{Component, Focusable, KeyCode, KeyEvent};
use flowtui_text::truncate_to_width;

/// A list of selectable string items with incremental filtering, wrapping
/// keyboard navigation, and a visible-row viewport.
pub struct SelectList {
    items: Vec<String>,
    filtered: Vec<usize>,
    filter: String,
    selected: usize,
    scroll: usize,
    visible_rows: usize,
    focused: bool,
    on_select: Option<Box<dyn FnMut(&str)>>,
    on_cancel: Option<Box<dyn FnMut()>>,
}

impl SelectList {
    #[must_use]
    pub fn new(items: Vec<String>, visible_rows: usize) -> Self {
        let filtered = (0..items.len()).collect();
        Self {
            items,
            filtered,
            filter: String::new(),
            selected: 0,
            scroll: 0,
            visible_rows,
            focused: false,
            on_select: None,
            on_cancel: None,
        }
    }

    pub fn on_select(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    pub fn on_cancel(&mut self, callback: impl FnMut() + 'static) {
        self.on_cancel = Some(Box::new(callback));
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&str> {
        self.filtered
            .get(self.selected)
            .map(|&i| self.items[i].as_str())
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| needle.is_empty() || item.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
        self.scroll = 0;
    }

    fn move_selection(&mut self, delta: isize) {
        if self.filtered.is_empty() {
            return;
        }
        let len = self.filtered.len() as isize;
        let current = self.selected as isize;
        let next = ((current + delta) % len + len) % len;
        self.selected = next as usize;
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        if self.visible_rows == 0 {
            return;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.visible_rows {
            self.scroll = self.selected + 1 - self.visible_rows;
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) -> bool {
        match event.code {
            KeyCode::Up => {
                self.move_selection(-1);
                true
            }
            KeyCode::Down => {
                self.move_selection(1);
                true
            }
            KeyCode::Enter => {
                if let Some(item) = self.selected_item().map(str::to_string) {
                    if let Some(callback) = &mut self.on_select {
                        callback(&item);
                    }
                }
                true
            }
            KeyCode::Escape => {
                if !self.filter.is_empty() {
                    self.filter.clear();
                    self.refilter();
                } else if let Some(callback) = &mut self.on_cancel {
                    callback();
                }
                true
            }
            KeyCode::Backspace => {
                if self.filter.pop().is_some() {
                    self.refilter();
                    true
                } else {
                    false
                }
            }
            KeyCode::Char(c) if !event.ctrl() && !event.alt() => {
                self.filter.push(c);
                self.refilter();
                true
            }
            _ => false,
        }
    }
}

impl Component for SelectList {
    fn render(&self, width: usize) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + self.visible_rows);
        let prompt = format!("Filter: {}", self.filter);
        lines.push(truncate_to_width(&prompt, width, "…", true));

        if self.filtered.is_empty() {
            lines.push(truncate_to_width("(no matches)", width, "…", true));
        }

        for row in 0..self.visible_rows {
            let idx = self.scroll + row;
            let Some(&item_idx) = self.filtered.get(idx) else {
                break;
            };
            let marker = if idx == self.selected { "> " } else { "  " };
            let line = format!("{marker}{}", self.items[item_idx]);
            lines.push(truncate_to_width(&line, width, "…", true));
        }

        lines
    }

    fn invalidate(&mut self) {}

    fn handle_input(&mut self, event: &KeyEvent) -> bool {
        self.handle_key(event)
    }
}

impl Focusable for SelectList {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
        }
    }
}
