#![forbid(unsafe_code)]

//! Column-indexed slicing of a styled line — the primitive overlay
//! compositing is built on: carving out a `[start_col, start_col + length)`
//! window while keeping whatever SGR/OSC8 style was open at `start_col` and
//! resetting at the end so neighboring content in a composited line is never
//! bled into.

use crate::ansi::AnsiState;
use crate::clusters::build_clusters;

/// Extract the visible window `[start_col, start_col + length)` from `s`.
///
/// The returned string:
/// - is exactly `length` columns wide (right-padded with spaces if `s` does
///   not have enough content to fill the window);
/// - opens with whatever style (SGR + hyperlink) was active at `start_col`,
///   so a mid-line cut does not lose its formatting;
/// - closes with `ESC[0m` if any styled content was emitted, so splicing
///   this window next to other content never leaks style past the window
///   boundary;
/// - replaces a double-width character that straddles either boundary with
///   a single space, since half a wide glyph cannot be rendered.
#[must_use]
pub fn slice_by_column(s: &str, start_col: usize, length: usize) -> String {
    if length == 0 {
        return String::new();
    }
    let end_col = start_col + length;

    let mut ansi = AnsiState::new();
    let mut col = 0usize;
    let mut out = String::new();
    let mut out_width = 0usize;
    let mut opened = false;

    for c in build_clusters(s) {
        if col >= end_col {
            break;
        }
        let next_col = col + c.width;

        if next_col <= start_col {
            ansi.observe_all(&c.raw);
            col = next_col;
            continue;
        }

        if col < start_col && next_col > start_col {
            // Straddles the left boundary: can only happen for a width-2
            // cluster, which becomes a single blank column inside the
            // window.
            ansi.observe_all(&c.raw);
            if !opened {
                out.push_str(&ansi.prefix());
                opened = true;
            }
            out.push(' ');
            out_width += 1;
            col = next_col;
            continue;
        }

        if next_col > end_col {
            // Straddles the right boundary: same treatment.
            if !opened {
                out.push_str(&ansi.prefix());
                opened = true;
            }
            out.push(' ');
            out_width += 1;
            ansi.observe_all(&c.raw);
            col = next_col;
            break;
        }

        if !opened {
            out.push_str(&ansi.prefix());
            opened = true;
        }
        out.push_str(&c.raw);
        out_width += c.width;
        ansi.observe_all(&c.raw);
        col = next_col;
    }

    if opened {
        out.push_str("\x1b[0m");
    }
    if out_width < length {
        out.push_str(&" ".repeat(length - out_width));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::visible_width;

    #[test]
    fn basic_slice() {
        assert_eq!(slice_by_column("hello world", 6, 5), "world");
    }

    #[test]
    fn pads_short_tail() {
        let out = slice_by_column("hi", 0, 5);
        assert_eq!(out, "hi   ");
    }

    #[test]
    fn preserves_open_style_at_window_start() {
        let out = slice_by_column("\x1b[31mhello world", 6, 5);
        assert!(out.starts_with("\x1b[31m"));
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn replaces_straddling_wide_char_with_space() {
        // "中" is width 2 at columns [0,2). Slicing starting at column 1
        // straddles it.
        let out = slice_by_column("\u{4e2d}ab", 1, 3);
        assert_eq!(visible_width(&out), 3);
        assert!(out.contains(' '));
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(slice_by_column("hello", 2, 0), "");
    }

    #[test]
    fn window_past_end_is_all_padding() {
        assert_eq!(slice_by_column("hi", 10, 4), "    ");
    }
}
