#![forbid(unsafe_code)]

//! The `Terminal` capability set: an opaque byte sink/source with size
//! queries and pure cursor-motion generators, plus a scoped raw-mode guard.
//! `flowtui-render` never talks to a real terminal directly — it only ever
//! holds a `&mut dyn Terminal`.

use std::time::Duration;

use thiserror::Error;

/// Failure from a [`Terminal`] operation.
///
/// Grounded on `ftui-core`'s use of `io::Error` at I/O boundaries: terminal
/// failures are not recoverable by the library, only propagatable.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("terminal is not a TTY")]
    NotATty,
}

/// Opaque terminal byte sink/source with size queries and pure cursor-motion
/// string generators.
pub trait Terminal {
    /// Write raw bytes to the terminal. No interpretation or buffering
    /// beyond what the implementation itself needs.
    fn write(&mut self, bytes: &[u8]) -> Result<(), TerminalError>;

    /// Block for at most `timeout` waiting for one decoded input chunk
    /// (a single key press or one complete escape sequence). Returns `None`
    /// on timeout with no input available.
    fn read_sequence(&mut self, timeout: Duration) -> Result<Option<String>, TerminalError>;

    /// Current terminal size as `(cols, rows)`.
    fn get_size(&self) -> Result<(u16, u16), TerminalError>;

    /// Enter raw mode. Callers should prefer [`Terminal::raw_mode_guard`]
    /// over calling this directly, since that pairs acquisition with
    /// guaranteed restoration.
    fn set_raw_mode(&mut self) -> Result<(), TerminalError>;

    /// Restore cooked mode. Idempotent: safe to call even if raw mode was
    /// never entered.
    fn restore_mode(&mut self) -> Result<(), TerminalError>;

    /// Hide the hardware cursor.
    fn hide_cursor(&mut self) -> Result<(), TerminalError>;

    /// Show the hardware cursor.
    fn show_cursor(&mut self) -> Result<(), TerminalError>;
}

/// Pure cursor-motion sequence generator: `ESC [ n A`, empty for `n <= 0`.
#[must_use]
pub fn move_cursor_up(n: i32) -> String {
    if n <= 0 {
        String::new()
    } else {
        format!("\x1b[{n}A")
    }
}

/// Pure cursor-motion sequence generator: `ESC [ n B`, empty for `n <= 0`.
#[must_use]
pub fn move_cursor_down(n: i32) -> String {
    if n <= 0 {
        String::new()
    } else {
        format!("\x1b[{n}B")
    }
}

/// Pure cursor-motion sequence generator: `ESC [ n C`, empty for `n <= 0`.
#[must_use]
pub fn move_cursor_forward(n: i32) -> String {
    if n <= 0 {
        String::new()
    } else {
        format!("\x1b[{n}C")
    }
}

/// Clear the visible screen: `ESC[2J`.
#[must_use]
pub fn clear_screen() -> String {
    "\x1b[2J".to_string()
}

/// Clear the terminal's scrollback history: `ESC[3J`.
#[must_use]
pub fn clear_scrollback() -> String {
    "\x1b[3J".to_string()
}

/// Move the cursor to the top-left corner: `ESC[H`.
#[must_use]
pub fn home() -> String {
    "\x1b[H".to_string()
}

/// Clear screen, clear scrollback, and home: `ESC[2J ESC[3J ESC[H`.
#[must_use]
pub fn clear() -> String {
    format!("{}{}{}", clear_screen(), clear_scrollback(), home())
}

/// Clear the current line: `ESC[2K`.
#[must_use]
pub fn clear_line() -> String {
    "\x1b[2K".to_string()
}

/// Hide the hardware cursor: `ESC[?25l`.
pub const HIDE_CURSOR: &str = "\x1b[?25l";

/// Show the hardware cursor: `ESC[?25h`.
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Begin a synchronized-output block (DEC private mode 2026).
pub const SYNC_BEGIN: &str = "\x1b[?2026h";

/// End a synchronized-output block (DEC private mode 2026).
pub const SYNC_END: &str = "\x1b[?2026l";

/// Per-line tail reset emitted after writing a line's content: clears any
/// lingering SGR attribute, clears to end-of-line, and closes any dangling
/// OSC 8 hyperlink.
#[must_use]
pub fn tail_reset() -> String {
    "\x1b[0m\x1b[K\x1b]8;;\x07".to_string()
}

/// Scoped raw-mode + hidden-cursor acquisition. `Drop` restores cooked mode
/// and shows the cursor unconditionally, including on unwind, so `stop()`
/// and panic paths never leave the terminal in raw mode with the cursor
/// stuck hidden.
///
/// Grounded on `ftui-core::inline_mode::InlineRenderer`'s Drop-based
/// cleanup discipline.
pub struct RawModeGuard<'a> {
    terminal: &'a mut dyn Terminal,
    active: bool,
}

impl<'a> RawModeGuard<'a> {
    /// Enter raw mode and hide the cursor on `terminal`, returning a guard
    /// that restores both when dropped.
    pub fn acquire(terminal: &'a mut dyn Terminal) -> Result<Self, TerminalError> {
        terminal.set_raw_mode()?;
        terminal.hide_cursor()?;
        #[cfg(feature = "tracing")]
        tracing::debug!("raw mode acquired, cursor hidden");
        Ok(Self {
            terminal,
            active: true,
        })
    }
}

impl Drop for RawModeGuard<'_> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.terminal.show_cursor();
            let _ = self.terminal.restore_mode();
            self.active = false;
            #[cfg(feature = "tracing")]
            tracing::debug!("cursor shown, raw mode restored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_cursor_up_empty_for_non_positive() {
        assert_eq!(move_cursor_up(0), "");
        assert_eq!(move_cursor_up(-1), "");
    }

    #[test]
    fn move_cursor_up_generates_csi_a() {
        assert_eq!(move_cursor_up(3), "\x1b[3A");
    }

    #[test]
    fn move_cursor_down_generates_csi_b() {
        assert_eq!(move_cursor_down(2), "\x1b[2B");
    }

    #[test]
    fn move_cursor_forward_generates_csi_c() {
        assert_eq!(move_cursor_forward(4), "\x1b[4C");
    }

    #[test]
    fn clear_sequence_matches_spec() {
        assert_eq!(clear(), "\x1b[2J\x1b[3J\x1b[H");
    }
}
