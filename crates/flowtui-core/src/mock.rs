#![forbid(unsafe_code)]

//! In-memory [`Terminal`] implementation for tests: accepts queued input
//! chunks and records every written byte for assertion.

use std::collections::VecDeque;
use std::time::Duration;

use crate::terminal::{Terminal, TerminalError};

/// An in-memory terminal. Construct with [`MockTerminal::new`], queue input
/// with [`MockTerminal::push_input`], then drive a renderer against it and
/// inspect [`MockTerminal::written`]/[`MockTerminal::written_bytes`].
#[derive(Debug, Default)]
pub struct MockTerminal {
    cols: u16,
    rows: u16,
    written: Vec<u8>,
    input: VecDeque<String>,
    raw_mode: bool,
    cursor_visible: bool,
    raw_mode_enter_count: u32,
    raw_mode_restore_count: u32,
}

impl MockTerminal {
    /// Create a mock terminal of the given size, cursor initially visible.
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            written: Vec::new(),
            input: VecDeque::new(),
            raw_mode: false,
            cursor_visible: true,
            raw_mode_enter_count: 0,
            raw_mode_restore_count: 0,
        }
    }

    /// Queue an input chunk to be returned by a future [`Terminal::read_sequence`].
    pub fn push_input(&mut self, chunk: impl Into<String>) {
        self.input.push_back(chunk.into());
    }

    /// Resize the terminal (simulating a `SIGWINCH`-driven change).
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// Every byte ever written, concatenated in order.
    #[must_use]
    pub fn written_bytes(&self) -> &[u8] {
        &self.written
    }

    /// [`Self::written_bytes`] interpreted as UTF-8 (panics if invalid —
    /// flowtui never writes non-UTF-8 bytes to the terminal).
    #[must_use]
    pub fn written(&self) -> &str {
        std::str::from_utf8(&self.written).expect("flowtui only ever writes UTF-8")
    }

    /// Discard everything written so far (useful between frames in a test).
    pub fn clear_written(&mut self) {
        self.written.clear();
    }

    /// Whether raw mode is currently active.
    #[must_use]
    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    /// Whether the hardware cursor is currently shown.
    #[must_use]
    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Number of times raw mode was entered.
    #[must_use]
    pub fn raw_mode_enter_count(&self) -> u32 {
        self.raw_mode_enter_count
    }

    /// Number of times raw mode was restored.
    #[must_use]
    pub fn raw_mode_restore_count(&self) -> u32 {
        self.raw_mode_restore_count
    }
}

impl Terminal for MockTerminal {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TerminalError> {
        self.written.extend_from_slice(bytes);
        Ok(())
    }

    fn read_sequence(&mut self, _timeout: Duration) -> Result<Option<String>, TerminalError> {
        Ok(self.input.pop_front())
    }

    fn get_size(&self) -> Result<(u16, u16), TerminalError> {
        Ok((self.cols, self.rows))
    }

    fn set_raw_mode(&mut self) -> Result<(), TerminalError> {
        self.raw_mode = true;
        self.raw_mode_enter_count += 1;
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<(), TerminalError> {
        self.raw_mode = false;
        self.raw_mode_restore_count += 1;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), TerminalError> {
        self.cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<(), TerminalError> {
        self.cursor_visible = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::RawModeGuard;

    #[test]
    fn records_written_bytes() {
        let mut term = MockTerminal::new(80, 24);
        term.write(b"hello").unwrap();
        assert_eq!(term.written(), "hello");
    }

    #[test]
    fn queued_input_drains_in_order() {
        let mut term = MockTerminal::new(80, 24);
        term.push_input("a");
        term.push_input("b");
        assert_eq!(
            term.read_sequence(Duration::from_millis(0)).unwrap(),
            Some("a".to_string())
        );
        assert_eq!(
            term.read_sequence(Duration::from_millis(0)).unwrap(),
            Some("b".to_string())
        );
        assert_eq!(term.read_sequence(Duration::from_millis(0)).unwrap(), None);
    }

    #[test]
    fn reports_configured_size() {
        let term = MockTerminal::new(100, 40);
        assert_eq!(term.get_size().unwrap(), (100, 40));
    }

    #[test]
    fn resize_changes_reported_size() {
        let mut term = MockTerminal::new(80, 24);
        term.resize(120, 30);
        assert_eq!(term.get_size().unwrap(), (120, 30));
    }

    #[test]
    fn raw_mode_guard_restores_on_drop() {
        let mut term = MockTerminal::new(80, 24);
        {
            let _guard = RawModeGuard::acquire(&mut term).unwrap();
            assert!(term.is_raw_mode());
            assert!(!term.is_cursor_visible());
        }
        assert!(!term.is_raw_mode());
        assert!(term.is_cursor_visible());
        assert_eq!(term.raw_mode_enter_count(), 1);
        assert_eq!(term.raw_mode_restore_count(), 1);
    }

    #[test]
    fn raw_mode_guard_restores_even_on_unwind() {
        let mut term = MockTerminal::new(80, 24);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = RawModeGuard::acquire(&mut term).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(!term.is_raw_mode());
        assert!(term.is_cursor_visible());
    }

    #[test]
    fn cursor_visibility_toggles() {
        let mut term = MockTerminal::new(80, 24);
        term.hide_cursor().unwrap();
        assert!(!term.is_cursor_visible());
        term.show_cursor().unwrap();
        assert!(term.is_cursor_visible());
    }
}
