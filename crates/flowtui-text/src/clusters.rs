#![forbid(unsafe_code)]

//! Shared tokenization: a styled line broken into minimal "clusters" — a
//! visible base code point (plus any immediately preceding escape
//! sequences and any following zero-width combining marks) or a bare
//! escape-only cluster for trailing style changes. Used by [`crate::wrap`]
//! and [`crate::slice`] so both operate on the same notion of "one movable
//! unit of line content".

use crate::ansi::{ESC, skip_escape_sequence};
use crate::width::char_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClusterKind {
    Word,
    Space,
    Newline,
}

#[derive(Debug, Clone)]
pub(crate) struct Cluster {
    pub raw: String,
    pub width: usize,
    pub kind: ClusterKind,
}

/// Break `s` into clusters, in order. Escapes are attached as a prefix to
/// the next visible cluster; any escapes that never meet a following
/// visible character form a trailing zero-width `Word` cluster.
pub(crate) fn build_clusters(s: &str) -> Vec<Cluster> {
    let bytes = s.as_bytes();
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut pending = String::new();
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] == ESC {
            let end = skip_escape_sequence(bytes, i);
            pending.push_str(&s[i..end]);
            i = end;
            continue;
        }

        let ch = s[i..].chars().next().expect("char boundary");
        let ch_len = ch.len_utf8();

        if ch == '\r' {
            // Folded away: callers treat "\n" as the only line-break marker.
            i += ch_len;
            continue;
        }

        if ch == '\n' {
            let raw = std::mem::take(&mut pending) + "\n";
            clusters.push(Cluster {
                raw,
                width: 0,
                kind: ClusterKind::Newline,
            });
            i += ch_len;
            continue;
        }

        let width = char_width(ch);
        if width == 0 {
            // Combining mark: glue onto the previous visible cluster so it
            // never gets separated from its base character by a wrap point.
            if let Some(last) = clusters
                .last_mut()
                .filter(|c| c.kind != ClusterKind::Newline)
            {
                if !pending.is_empty() {
                    last.raw.push_str(&pending);
                    pending.clear();
                }
                last.raw.push(ch);
                i += ch_len;
                continue;
            }
            let mut raw = std::mem::take(&mut pending);
            raw.push(ch);
            clusters.push(Cluster {
                raw,
                width: 0,
                kind: ClusterKind::Word,
            });
            i += ch_len;
            continue;
        }

        let kind = if ch == ' ' || ch == '\t' {
            ClusterKind::Space
        } else {
            // A non-breaking space is never a break point: treat it as
            // ordinary word content so it glues its neighbors together.
            ClusterKind::Word
        };
        let mut raw = std::mem::take(&mut pending);
        raw.push(ch);
        clusters.push(Cluster { raw, width, kind });
        i += ch_len;
    }

    if !pending.is_empty() {
        clusters.push(Cluster {
            raw: pending,
            width: 0,
            kind: ClusterKind::Word,
        });
    }

    clusters
}
