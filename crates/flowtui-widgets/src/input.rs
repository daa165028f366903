#![forbid(unsafe_code)]

//! Single-line text input with cursor and horizontal scrolling.

use flowtui_core::{embed_cursor_marker, Component, Focusable, KeyCode, KeyEvent};
use flowtui_text::{slice_by_column, visible_width};
use unicode_segmentation::UnicodeSegmentation;

/// Single-line text input. Maintains its own buffer and grapheme-indexed
/// cursor; renders the (possibly masked) value with the cursor marker
/// embedded at the active column.
pub struct Input {
    value: String,
    cursor: usize,
    max_length: Option<usize>,
    mask_char: Option<char>,
    placeholder: String,
    focused: bool,
    on_submit: Option<Box<dyn FnMut(&str)>>,
    on_cancel: Option<Box<dyn FnMut()>>,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            max_length: None,
            mask_char: None,
            placeholder: String::new(),
            focused: false,
            on_submit: None,
            on_cancel: None,
        }
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub fn with_password_mask(mut self, mask_char: char) -> Self {
        self.mask_char = Some(mask_char);
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn on_submit(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_submit = Some(Box::new(callback));
    }

    pub fn on_cancel(&mut self, callback: impl FnMut() + 'static) {
        self.on_cancel = Some(Box::new(callback));
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    fn graphemes(&self) -> Vec<&str> {
        self.value.graphemes(true).collect()
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn insert_char(&mut self, c: char) {
        if let Some(max) = self.max_length {
            if self.grapheme_count() >= max {
                return;
            }
        }
        let graphemes = self.graphemes();
        let mut new_value = String::with_capacity(self.value.len() + c.len_utf8());
        for (i, g) in graphemes.iter().enumerate() {
            if i == self.cursor {
                new_value.push(c);
            }
            new_value.push_str(g);
        }
        if self.cursor >= graphemes.len() {
            new_value.push(c);
        }
        self.value = new_value;
        self.cursor += 1;
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        let graphemes = self.graphemes();
        self.value = graphemes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i < start || *i >= end)
            .map(|(_, g)| *g)
            .collect();
        self.cursor = start;
    }

    fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let count = self.grapheme_count();
        match event.code {
            KeyCode::Char('a') if event.ctrl() => {
                self.cursor = 0;
                true
            }
            KeyCode::Char('e') if event.ctrl() => {
                self.cursor = count;
                true
            }
            KeyCode::Char('u') if event.ctrl() => {
                if self.cursor > 0 {
                    self.delete_range(0, self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Char('k') if event.ctrl() => {
                if self.cursor < count {
                    self.delete_range(self.cursor, count);
                    true
                } else {
                    false
                }
            }
            KeyCode::Char(c) if !event.ctrl() && !event.alt() => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.delete_range(self.cursor - 1, self.cursor);
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor < count {
                    self.delete_range(self.cursor, self.cursor + 1);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Right => {
                if self.cursor < count {
                    self.cursor += 1;
                    true
                } else {
                    false
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = count;
                true
            }
            KeyCode::Enter => {
                if let Some(callback) = &mut self.on_submit {
                    callback(&self.value);
                }
                true
            }
            KeyCode::Escape => {
                if let Some(callback) = &mut self.on_cancel {
                    callback();
                }
                true
            }
            _ => false,
        }
    }

    fn displayed_value(&self) -> String {
        match self.mask_char {
            Some(mask) => mask.to_string().repeat(self.grapheme_count()),
            None => self.value.clone(),
        }
    }

    fn cursor_column(&self) -> usize {
        match self.mask_char {
            Some(_) => self.cursor,
            None => visible_width(&self.graphemes()[..self.cursor.min(self.grapheme_count())].concat()),
        }
    }
}

impl Component for Input {
    fn render(&self, width: usize) -> Vec<String> {
        if width == 0 {
            return vec![String::new()];
        }

        if self.value.is_empty() && !self.focused && !self.placeholder.is_empty() {
            let dimmed = format!("\x1b[2m{}\x1b[0m", self.placeholder);
            return vec![flowtui_text::truncate_to_width(&dimmed, width, "…", true)];
        }

        let content = self.displayed_value();
        let cursor_col = self.cursor_column();

        let scroll = if cursor_col >= width {
            cursor_col + 1 - width
        } else {
            0
        };
        let mut line = slice_by_column(&content, scroll, width);
        if self.focused {
            let relative_col = cursor_col.saturating_sub(scroll);
            line = embed_cursor_marker(&line, relative_col);
        }
        vec![line]
    }

    fn invalidate(&mut self) {}

    fn handle_input(&mut self, event: &KeyEvent) -> bool {
        self.handle_key(event)
    }
}

impl Focusable for Input {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
        }
    }
}
