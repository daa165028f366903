#![forbid(unsafe_code)]

//! Fixed-width truncation with an ellipsis, preserving embedded style.

use crate::ansi::AnsiState;
use crate::clusters::build_clusters;
use crate::width::visible_width;

/// Truncate `s` to at most `width` visible columns.
///
/// If `s` already fits, it is returned unchanged (except that, when `pad` is
/// `true`, it is right-padded with spaces to exactly `width` columns). If it
/// does not fit, content is cut to make room for `ellipsis` and any SGR/OSC8
/// style open at the cut point is closed with a reset so the ellipsis itself
/// is never accidentally styled.
///
/// When `width` is too small to fit even the ellipsis, the ellipsis itself is
/// truncated to `width` columns (and may end up empty).
#[must_use]
pub fn truncate_to_width(s: &str, width: usize, ellipsis: &str, pad: bool) -> String {
    if visible_width(s) <= width {
        if pad {
            return pad_to_width(s, width);
        }
        return s.to_string();
    }

    let ellipsis_width = visible_width(ellipsis);
    if ellipsis_width > width {
        return truncate_to_width(ellipsis, width, "", pad);
    }

    let budget = width - ellipsis_width;
    let mut ansi = AnsiState::new();
    let mut out = String::new();
    let mut out_width = 0usize;

    for c in build_clusters(s) {
        if out_width + c.width > budget {
            break;
        }
        out.push_str(&c.raw);
        out_width += c.width;
        ansi.observe_all(&c.raw);
    }

    if !ansi.is_empty() {
        out.push_str("\x1b[0m");
    }
    out.push_str(ellipsis);
    out_width += ellipsis_width;

    if pad && out_width < width {
        out.push_str(&" ".repeat(width - out_width));
    }
    out
}

fn pad_to_width(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        return s.to_string();
    }
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width - w));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_unchanged() {
        assert_eq!(truncate_to_width("hi", 10, "...", false), "hi");
    }

    #[test]
    fn truncates_with_ellipsis() {
        let out = truncate_to_width("hello world", 8, "...", false);
        assert_eq!(visible_width(&out), 8);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn closes_open_style_before_ellipsis() {
        let out = truncate_to_width("\x1b[31mhello world", 8, "...", false);
        assert!(out.contains("\x1b[0m..."));
    }

    #[test]
    fn pads_when_requested() {
        let out = truncate_to_width("hi", 5, "...", true);
        assert_eq!(out, "hi   ");
        assert_eq!(visible_width(&out), 5);
    }

    #[test]
    fn ellipsis_itself_truncated_when_width_too_small() {
        let out = truncate_to_width("hello", 2, "...", false);
        assert_eq!(visible_width(&out), 2);
    }

    #[test]
    fn zero_width_is_empty() {
        assert_eq!(truncate_to_width("hello", 0, "...", false), "");
    }
}
