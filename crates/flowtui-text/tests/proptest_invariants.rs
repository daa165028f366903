//! Property tests over arbitrary styled-line-shaped input: the width, wrap,
//! truncate, and slice primitives must never panic and must hold their
//! stated invariants no matter what garbage of ANSI escapes and Unicode is
//! thrown at them.

use flowtui_text::{slice_by_column, truncate_to_width, visible_width, wrap_text_with_ansi};
use proptest::prelude::*;

fn arb_styled_text(max_len: usize) -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        3 => "[a-zA-Z0-9 ]{1,6}".prop_map(|s| s),
        1 => Just("\x1b[1;31m".to_string()),
        1 => Just("\x1b[0m".to_string()),
        1 => Just("\x1b]8;;https://x\x07".to_string()),
        1 => Just("\x1b]8;;\x07".to_string()),
        1 => Just("\n".to_string()),
        1 => Just("\u{00A0}".to_string()),
        1 => Just("\u{4e2d}".to_string()),
    ];
    prop::collection::vec(piece, 0..max_len).prop_map(|v| v.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn wrap_never_panics_and_respects_width(text in arb_styled_text(20), width in 1usize..12) {
        let lines = wrap_text_with_ansi(&text, width);
        for line in &lines {
            prop_assert!(visible_width(line) <= width);
        }
    }

    #[test]
    fn truncate_never_exceeds_width(text in arb_styled_text(20), width in 0usize..12) {
        let out = truncate_to_width(&text, width, "...", false);
        prop_assert!(visible_width(&out) <= width);
    }

    #[test]
    fn truncate_pad_hits_exact_width(text in arb_styled_text(20), width in 1usize..12) {
        let out = truncate_to_width(&text, width, "...", true);
        prop_assert_eq!(visible_width(&out), width);
    }

    #[test]
    fn slice_always_hits_requested_length(
        text in arb_styled_text(20),
        start in 0usize..10,
        len in 0usize..10,
    ) {
        let out = slice_by_column(&text, start, len);
        prop_assert_eq!(visible_width(&out), len);
    }

    #[test]
    fn visible_width_never_panics(text in arb_styled_text(30)) {
        let _ = visible_width(&text);
    }
}
