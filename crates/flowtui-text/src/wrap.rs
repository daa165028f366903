#![forbid(unsafe_code)]

//! Word wrapping that preserves ANSI/OSC8 state across line breaks.
//!
//! # Example
//! ```
//! use flowtui_text::wrap_text_with_ansi;
//!
//! let lines = wrap_text_with_ansi("hello there world", 7);
//! assert_eq!(lines, vec!["hello", "there", "world"]);
//! ```

use crate::ansi::AnsiState;
use crate::clusters::{Cluster, ClusterKind, build_clusters};
use crate::width::visible_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Word,
    Space,
    Newline,
}

struct Run {
    raw: String,
    width: usize,
    kind: RunKind,
}

fn group_runs(clusters: Vec<Cluster>) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for c in clusters {
        let kind = match c.kind {
            ClusterKind::Word => RunKind::Word,
            ClusterKind::Space => RunKind::Space,
            ClusterKind::Newline => RunKind::Newline,
        };
        if kind != RunKind::Newline {
            if let Some(last) = runs.last_mut() {
                if last.kind == kind {
                    last.raw.push_str(&c.raw);
                    last.width += c.width;
                    continue;
                }
            }
        }
        runs.push(Run {
            raw: c.raw,
            width: c.width,
            kind,
        });
    }
    runs
}

/// Split a run's raw text into pieces no wider than `width`, breaking on
/// visible-column boundaries (used when a single word exceeds the wrap
/// width). Each piece may still exceed `width` if a single cluster itself
/// does (e.g. a width-2 glyph wrapped at width 1) — there is no narrower
/// unit to break on.
fn hard_break(raw: &str, width: usize) -> Vec<(String, usize)> {
    let mut pieces = Vec::new();
    let mut cur = String::new();
    let mut cur_width = 0usize;
    for c in build_clusters(raw) {
        if cur_width > 0 && cur_width + c.width > width {
            pieces.push((std::mem::take(&mut cur), cur_width));
            cur_width = 0;
        }
        cur.push_str(&c.raw);
        cur_width += c.width;
    }
    if !cur.is_empty() {
        pieces.push((cur, cur_width));
    }
    pieces
}

/// Word-wrap `s` to `width` visible columns, preserving any SGR/OSC8 state
/// that is "open" at each wrap point by re-emitting it at the start of the
/// continuation line. A non-breaking space never breaks; words longer than
/// `width` are hard-broken on visible-column boundaries. The caller (the
/// renderer) is responsible for appending a trailing reset — this function
/// does not add one.
///
/// Invariant: `visible_width(line) <= width` for every returned line
/// (barring the single-too-wide-cluster edge case noted in [`hard_break`]).
#[must_use]
pub fn wrap_text_with_ansi(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let runs = group_runs(build_clusters(s));
    let mut ansi = AnsiState::new();
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_width = 0usize;

    macro_rules! flush {
        () => {
            lines.push(std::mem::take(&mut cur));
            cur_width = 0;
        };
    }

    for run in runs {
        match run.kind {
            RunKind::Newline => {
                ansi.observe_all(&run.raw);
                flush!();
            }
            RunKind::Space => {
                if cur_width == 0 {
                    // Drop leading whitespace on a fresh line but still track
                    // any style changes embedded in it.
                    ansi.observe_all(&run.raw);
                } else if cur_width + run.width <= width {
                    cur.push_str(&run.raw);
                    cur_width += run.width;
                    ansi.observe_all(&run.raw);
                } else {
                    ansi.observe_all(&run.raw);
                    flush!();
                }
            }
            RunKind::Word => {
                if run.width <= width {
                    if cur_width + run.width > width {
                        flush!();
                        cur.push_str(&ansi.prefix());
                    }
                    cur.push_str(&run.raw);
                    cur_width += run.width;
                    ansi.observe_all(&run.raw);
                } else {
                    for (piece, piece_width) in hard_break(&run.raw, width) {
                        if cur_width > 0 && cur_width + piece_width > width {
                            flush!();
                        }
                        if cur.is_empty() {
                            cur.push_str(&ansi.prefix());
                        }
                        cur.push_str(&piece);
                        cur_width += piece_width;
                        ansi.observe_all(&piece);
                        if cur_width >= width {
                            flush!();
                        }
                    }
                }
            }
        }
    }

    if !cur.is_empty() || lines.is_empty() {
        lines.push(cur);
    }
    lines
}
