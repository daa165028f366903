#![forbid(unsafe_code)]

//! The observable cursor marker: an APC-introduced private string embedded
//! in-band by a focused input component's rendered line, located and
//! stripped by the renderer to position the real hardware cursor.
//!
//! Byte pattern: `ESC _ f t m : <col-hex> BEL` — tagged `ftm` (flowtui
//! marker) so it is unambiguous in captured traces. The payload carries the
//! *intended* column in hex for diagnostics only; the renderer does not
//! trust it and always recomputes the column from [`flowtui_text::visible_width`]
//! of the prefix preceding the marker. Terminals that don't recognize an APC
//! string ignore it, so the payload is never load-bearing, only the
//! marker's presence and position.

use flowtui_text::visible_width;

const PREFIX: &str = "\x1b_ftm:";
const SUFFIX: char = '\u{07}';

/// Embed a cursor marker at the given intended column (used for the
/// diagnostic payload only) into `line`, appended at the end.
#[must_use]
pub fn embed_cursor_marker(line: &str, intended_col: usize) -> String {
    format!("{line}{PREFIX}{intended_col:x}{SUFFIX}")
}

/// Locate the first cursor marker in `line`, returning the column at which
/// it sits (computed from the visible width of the text preceding it, not
/// from the marker's own payload) and the line with the marker bytes
/// stripped.
#[must_use]
pub fn extract_cursor_marker(line: &str) -> (String, Option<usize>) {
    let Some(start) = line.find(PREFIX) else {
        return (line.to_string(), None);
    };
    let after_prefix = start + PREFIX.len();
    let Some(rel_end) = line[after_prefix..].find(SUFFIX) else {
        return (line.to_string(), None);
    };
    let end = after_prefix + rel_end + SUFFIX.len_utf8();

    let col = visible_width(&line[..start]);
    let mut stripped = String::with_capacity(line.len() - (end - start));
    stripped.push_str(&line[..start]);
    stripped.push_str(&line[end..]);
    (stripped, Some(col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_then_extract_round_trips_column() {
        let line = embed_cursor_marker("hello", 5);
        let (stripped, col) = extract_cursor_marker(&line);
        assert_eq!(stripped, "hello");
        assert_eq!(col, Some(5));
    }

    #[test]
    fn column_is_recomputed_not_trusted() {
        // Payload claims column 99, but the real prefix is only 3 columns
        // wide — the renderer must trust visible_width, not the payload.
        let line = format!("abc{PREFIX}63{SUFFIX}");
        let (_stripped, col) = extract_cursor_marker(&line);
        assert_eq!(col, Some(3));
    }

    #[test]
    fn no_marker_present_returns_none() {
        let (stripped, col) = extract_cursor_marker("plain text");
        assert_eq!(stripped, "plain text");
        assert_eq!(col, None);
    }

    #[test]
    fn marker_with_ansi_prefix_counts_only_visible_columns() {
        let line = format!("\x1b[31mhi{PREFIX}2{SUFFIX}");
        let (stripped, col) = extract_cursor_marker(&line);
        assert_eq!(stripped, "\x1b[31mhi");
        assert_eq!(col, Some(2));
    }
}
