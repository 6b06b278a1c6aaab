//! Unicode character width classification policy.
//!
//! Terminals disagree on the East Asian Ambiguous category (box drawing,
//! arrows, Greek letters, some punctuation): Western terminals render these
//! single-width, CJK-locale terminals double-width. [`WidthPolicy`] lets the
//! caller pick the convention; everything else follows the Unicode East
//! Asian Width tables shipped with the `unicode-width` crate.
//!
//! The scanner intercepts BS/TAB/LF/VT/FF/CR before consulting the policy,
//! so this module only answers the question "how many cells does a printed
//! code point occupy": 0, 1, or 2.

use unicode_width::UnicodeWidthChar;

/// Cell-width convention for measuring a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidthPolicy {
    /// Standard Unicode width: East Asian Ambiguous characters are narrow.
    ///
    /// Matches most Western terminal emulators and is the default used by
    /// [`text_width`](crate::text_width) / [`text_offset`](crate::text_offset).
    #[default]
    Standard,

    /// East Asian Ambiguous characters are double-width, matching terminals
    /// configured for CJK locales.
    CjkAmbiguousWide,
}

impl WidthPolicy {
    /// Number of terminal cells the given code point occupies when printed.
    ///
    /// Returns `0` for control characters and zero-width code points
    /// (combining marks, ZWJ, format controls), `1` for narrow characters
    /// (including unassigned and private-use code points, which default to
    /// the conservative narrow class), and `2` for East Asian Wide and
    /// Fullwidth characters. Widths above 2 are clamped to 2.
    ///
    /// ```
    /// use textwidth::WidthPolicy;
    ///
    /// assert_eq!(WidthPolicy::Standard.char_width('x'), 1);
    /// assert_eq!(WidthPolicy::Standard.char_width('好'), 2);
    /// assert_eq!(WidthPolicy::Standard.char_width('\u{0301}'), 0);
    /// ```
    #[inline]
    #[must_use]
    pub fn char_width(self, ch: char) -> u8 {
        let w = match self {
            WidthPolicy::Standard => ch.width().unwrap_or(0),
            WidthPolicy::CjkAmbiguousWide => ch.width_cjk().unwrap_or(0),
        };
        w.min(2) as u8
    }
}
