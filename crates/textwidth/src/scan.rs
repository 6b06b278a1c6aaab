//! The width scan: per-code-point column/row accumulation and its reduction
//! to a total column count.
//!
//! [`text_offset`] walks the input once, applying exactly one rule per code
//! point (backspace, tab, line controls, or a graphic character of width 1
//! or 2) while tracking the cursor `(rows, column)`. [`text_width`] folds
//! that pair into a single cursor-advance figure.
//!
//! Wrapping is enabled when `start_column < wrap_column` and breaks the row
//! *before* a graphic character that would overflow, so a double-width
//! character is never split across the boundary. Tab is the one exception:
//! near the right edge it clamps to the last column instead of wrapping.
//!
//! # Example
//! ```
//! use textwidth::{text_offset, text_width};
//!
//! // Tab advances to the next multiple-of-8 column.
//! assert_eq!(text_width("a\tb", 0, 0), 9);
//!
//! // A wide character at column 9 of a 10-column row wraps whole.
//! let off = text_offset("123456789好", 0, 10);
//! assert_eq!((off.rows, off.column), (1, 2));
//! ```

use crate::policy::WidthPolicy;

/// Tab stops sit at every multiple of this column interval.
const TAB_INTERVAL: usize = 8;

/// Byte length above which a completed scan emits a trace event.
const LARGE_SCAN_BYTES: usize = 64 * 1024;

/// Cursor displacement produced by a width scan: rows advanced and the
/// ending column.
///
/// `rows` counts explicit vertical motion (LF/VT/FF) plus soft wraps;
/// `column` is the zero-based column the cursor lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextOffset {
    /// Rows advanced past the starting row.
    pub rows: usize,
    /// Ending column, zero-based.
    pub column: usize,
}

impl TextOffset {
    /// Fold this offset into a total column count of cursor advance, for the
    /// same `(start_column, wrap_column)` the scan was run with.
    ///
    /// With wrapping enabled every completed row contributes `wrap_column`
    /// columns. With wrapping disabled, rows only arise from LF/VT/FF and
    /// each counts as a single column of advance; the result is cursor
    /// movement distance, not visual area.
    ///
    /// The result is signed: backspace or carriage return can leave the
    /// cursor left of where it started.
    #[must_use]
    pub fn total_columns(&self, start_column: usize, wrap_column: usize) -> isize {
        let wrap_enabled = start_column < wrap_column;
        let advance = if wrap_enabled {
            self.rows * wrap_column + self.column
        } else {
            self.rows + self.column
        };
        advance as isize - start_column as isize
    }
}

/// Total columns of cursor advance for `text` printed from `start_column`
/// on a terminal `wrap_column` cells wide.
///
/// `wrap_column = 0` (or any value ≤ `start_column`) disables wrapping.
/// Uses [`WidthPolicy::Standard`]; see [`text_width_with_policy`] to treat
/// East Asian Ambiguous characters as wide.
///
/// ```
/// use textwidth::text_width;
///
/// assert_eq!(text_width("1234567890123456789012345", 0, 10), 25);
/// assert_eq!(text_width("123456789X\u{8}0", 0, 10), 10);
/// ```
#[must_use]
pub fn text_width(text: &str, start_column: usize, wrap_column: usize) -> isize {
    text_width_with_policy(text, start_column, wrap_column, WidthPolicy::default())
}

/// [`text_width`] with an explicit [`WidthPolicy`].
#[must_use]
pub fn text_width_with_policy(
    text: &str,
    start_column: usize,
    wrap_column: usize,
    policy: WidthPolicy,
) -> isize {
    text_offset_with_policy(text, start_column, wrap_column, policy)
        .total_columns(start_column, wrap_column)
}

/// Rows advanced and ending column for `text` printed from `start_column`
/// on a terminal `wrap_column` cells wide.
///
/// `wrap_column = 0` (or any value ≤ `start_column`) disables wrapping; in
/// that mode LF/VT/FF advance the row but leave the column untouched, as if
/// lines were infinitely long. Empty text yields `(0, start_column)`.
///
/// Uses [`WidthPolicy::Standard`]; see [`text_offset_with_policy`].
#[must_use]
pub fn text_offset(text: &str, start_column: usize, wrap_column: usize) -> TextOffset {
    text_offset_with_policy(text, start_column, wrap_column, WidthPolicy::default())
}

/// [`text_offset`] with an explicit [`WidthPolicy`].
///
/// This is the scan everything else composes. Per code point:
///
/// - `U+0008` BS: back one column, stopping at 0.
/// - `U+0009` TAB: advance to the next multiple-of-8 column; with wrapping
///   enabled, a stop at or past `wrap_column` clamps to `wrap_column - 1`
///   instead. Tab never breaks the row.
/// - `U+000A` LF: next row; column resets to 0 only when wrapping.
/// - `U+000B` VT / `U+000C` FF: next row, column unchanged.
/// - `U+000D` CR: column 0 when wrapping, otherwise ignored.
/// - Graphic code points: width 1 or 2 per `policy`; with wrapping enabled,
///   a character that would overflow `wrap_column` starts at column 0 of the
///   next row instead, never split.
/// - Other control and zero-width code points: ignored.
#[must_use]
pub fn text_offset_with_policy(
    text: &str,
    start_column: usize,
    wrap_column: usize,
    policy: WidthPolicy,
) -> TextOffset {
    let wrap_enabled = start_column < wrap_column;
    let mut rows = 0usize;
    let mut column = start_column;

    for ch in text.chars() {
        match ch {
            '\u{8}' => column = column.saturating_sub(1),
            '\t' => {
                let next_stop = (column | (TAB_INTERVAL - 1)) + 1;
                if !wrap_enabled {
                    column = next_stop;
                } else if next_stop < wrap_column {
                    column = next_stop;
                } else if column < wrap_column {
                    // Clamp to the last column rather than wrapping early.
                    column = wrap_column - 1;
                }
            }
            '\n' => {
                if wrap_enabled {
                    column = 0;
                }
                rows += 1;
            }
            '\u{b}' | '\u{c}' => rows += 1,
            '\r' => {
                if wrap_enabled {
                    column = 0;
                }
            }
            _ => match policy.char_width(ch) {
                2 => {
                    if wrap_enabled && column + 2 > wrap_column {
                        rows += 1;
                        column = 0;
                    }
                    column += 2;
                }
                1 => {
                    if wrap_enabled && column + 1 > wrap_column {
                        rows += 1;
                        column = 0;
                    }
                    column += 1;
                }
                _ => {}
            },
        }
    }

    if text.len() >= LARGE_SCAN_BYTES {
        tracing::trace!(
            bytes = text.len(),
            rows,
            column,
            start_column,
            wrap_column,
            "large width scan"
        );
    }

    TextOffset { rows, column }
}
