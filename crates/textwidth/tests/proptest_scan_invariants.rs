//! Property-based invariant tests for the width scan.
//!
//! Verifies structural guarantees that must hold for any input:
//!
//! 1. Determinism: identical arguments produce identical results.
//! 2. Total: the scan never panics for arbitrary Unicode and columns.
//! 3. Bounded end column: with wrapping enabled the cursor never ends past
//!    the wrap column, except that a one-column row still holds a placed
//!    wide character (ending at column 2).
//! 4. Monotonic rows: appending text never decreases the row count.
//! 5. Reducer agreement: `text_width` equals `text_offset` fed through
//!    `total_columns`.
//! 6. Sum rule: without controls and without wrapping, the total is the sum
//!    of per-character widths, independent of the start column.
//! 7. Wide characters land on even columns when the row width is even.

use proptest::prelude::*;
use textwidth::{WidthPolicy, text_offset, text_offset_with_policy, text_width};

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_columns() -> impl Strategy<Value = (usize, usize)> {
    (0usize..=40, 0usize..=40)
}

/// Text with no C0 controls, so every code point is either zero-width or a
/// graphic character.
fn arb_graphic_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        any::<char>().prop_filter("no controls", |c| !c.is_control()),
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn arb_policy() -> impl Strategy<Value = WidthPolicy> {
    prop_oneof![
        Just(WidthPolicy::Standard),
        Just(WidthPolicy::CjkAmbiguousWide),
    ]
}

// ═════════════════════════════════════════════════════════════════════
// 1–2. Determinism and totality
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scan_is_deterministic(
        text in any::<String>(),
        (start, wrap) in arb_columns(),
        policy in arb_policy(),
    ) {
        let a = text_offset_with_policy(&text, start, wrap, policy);
        let b = text_offset_with_policy(&text, start, wrap, policy);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn scan_is_total(text in any::<String>(), (start, wrap) in arb_columns()) {
        // Result values only need to be well-formed; reaching here without
        // a panic is the property.
        let off = text_offset(&text, start, wrap);
        let _ = off.total_columns(start, wrap);
    }
}

// ═════════════════════════════════════════════════════════════════════
// 3. Bounded end column under wrapping
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn end_column_never_exceeds_wrap_column(
        text in any::<String>(),
        start in 0usize..=20,
        extra in 1usize..=20,
    ) {
        // start < wrap by construction, so wrapping is enabled.
        let wrap = start + extra;
        let off = text_offset(&text, start, wrap);
        // A wide character always lands whole, so a wrap column of 1 can
        // still end at column 2; any wider row bounds the cursor at wrap.
        prop_assert!(
            off.column <= wrap.max(2),
            "end column {} past wrap column {} for {:?}",
            off.column, wrap, text
        );
    }
}

// ═════════════════════════════════════════════════════════════════════
// 4. Monotonic row count under append
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn appending_never_decreases_rows(
        prefix in any::<String>(),
        suffix in any::<String>(),
        (start, wrap) in arb_columns(),
    ) {
        let before = text_offset(&prefix, start, wrap).rows;
        let combined = format!("{prefix}{suffix}");
        let after = text_offset(&combined, start, wrap).rows;
        prop_assert!(after >= before, "rows shrank: {before} -> {after}");
    }
}

// ═════════════════════════════════════════════════════════════════════
// 5. Reducer agreement
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn width_equals_reduced_offset(
        text in any::<String>(),
        (start, wrap) in arb_columns(),
    ) {
        let off = text_offset(&text, start, wrap);
        prop_assert_eq!(off.total_columns(start, wrap), text_width(&text, start, wrap));
    }
}

// ═════════════════════════════════════════════════════════════════════
// 6. Sum rule without controls or wrapping
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn unwrapped_width_is_sum_of_char_widths(
        text in arb_graphic_text(),
        start in 0usize..=40,
        policy in arb_policy(),
    ) {
        let expected: isize = text
            .chars()
            .map(|c| isize::from(policy.char_width(c)))
            .sum();
        let off = text_offset_with_policy(&text, start, 0, policy);
        prop_assert_eq!(off.rows, 0);
        prop_assert_eq!(off.total_columns(start, 0), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════
// 7. Wide characters never straddle an even wrap boundary
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn wide_runs_stay_even_aligned(len in 0usize..=40, half_wrap in 1usize..=10) {
        let wrap = half_wrap * 2;
        let text: String = std::iter::repeat('好').take(len).collect();
        let off = text_offset(&text, 0, wrap);
        prop_assert_eq!(off.column % 2, 0, "wide char split at {:?}", off);
        prop_assert!(off.column <= wrap);
    }
}
