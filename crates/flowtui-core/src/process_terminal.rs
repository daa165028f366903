#![forbid(unsafe_code)]
#![cfg(feature = "crossterm")]

//! A real-terminal [`Terminal`] backed by `crossterm`. Raw mode, size
//! queries, and raw-byte read/write only — it performs no escape-sequence
//! interpretation itself; keyboard decoding stays out of the core. The
//! bytes it returns from [`Terminal::read_sequence`] are handed to the
//! side collaborator in [`crate::keymatch`] or to a caller-supplied decoder.

use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use crossterm::terminal;

use crate::terminal::{Terminal, TerminalError};

/// A `Terminal` backed by the real process stdin/stdout, via `crossterm`
/// for raw-mode and size queries.
pub struct ProcessTerminal {
    stdout: io::Stdout,
    raw_mode_active: bool,
}

impl ProcessTerminal {
    /// Open a `Terminal` over the current process's stdin/stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            raw_mode_active: false,
        }
    }
}

impl Default for ProcessTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for ProcessTerminal {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TerminalError> {
        self.stdout.write_all(bytes)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn read_sequence(&mut self, timeout: Duration) -> Result<Option<String>, TerminalError> {
        if !crossterm::event::poll(timeout).map_err(io::Error::from)? {
            return Ok(None);
        }

        // One key press is a single byte; one escape sequence is ESC
        // followed by a short burst of bytes that arrive together. Read the
        // first byte, then drain whatever else is immediately available
        // (bounded by a short grace window) so a full CSI/SS3 sequence is
        // returned as one chunk.
        let mut buf = [0u8; 1];
        io::stdin().read_exact(&mut buf)?;
        let mut chunk = vec![buf[0]];

        if buf[0] == 0x1b {
            let deadline = Instant::now() + Duration::from_millis(10);
            while Instant::now() < deadline {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() || !crossterm::event::poll(remaining).map_err(io::Error::from)? {
                    break;
                }
                let mut b = [0u8; 1];
                io::stdin().read_exact(&mut b)?;
                chunk.push(b[0]);
                let last = b[0];
                if (0x40..=0x7e).contains(&last) {
                    break;
                }
            }
        }

        Ok(Some(String::from_utf8_lossy(&chunk).into_owned()))
    }

    fn get_size(&self) -> Result<(u16, u16), TerminalError> {
        let (cols, rows) = terminal::size()?;
        Ok((cols, rows))
    }

    fn set_raw_mode(&mut self) -> Result<(), TerminalError> {
        terminal::enable_raw_mode()?;
        self.raw_mode_active = true;
        Ok(())
    }

    fn restore_mode(&mut self) -> Result<(), TerminalError> {
        if self.raw_mode_active {
            terminal::disable_raw_mode()?;
            self.raw_mode_active = false;
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<(), TerminalError> {
        self.write(crate::terminal::HIDE_CURSOR.as_bytes())
    }

    fn show_cursor(&mut self) -> Result<(), TerminalError> {
        self.write(crate::terminal::SHOW_CURSOR.as_bytes())
    }
}

impl Drop for ProcessTerminal {
    fn drop(&mut self) {
        let _ = self.restore_mode();
    }
}
