#![forbid(unsafe_code)]

//! Terminal text measurement for fixed-width character grids.
//!
//! Computes how many rows and columns a string occupies when printed to a
//! terminal, without rendering anything. The scan accounts for East Asian
//! wide characters (2 cells), tab stops (every 8 columns), backspace,
//! carriage return, and the line-control characters LF/VT/FF, with optional
//! soft wrapping at a configurable column.
//!
//! # Primary surface
//! - [`text_width`]: total columns of cursor advance for a string.
//! - [`text_offset`]: rows advanced and ending column (cursor position).
//! - [`WidthPolicy`]: how East Asian Ambiguous characters are measured.
//!
//! Wrapping is enabled whenever `start_column < wrap_column`; pass
//! `wrap_column = 0` to disable it. With wrapping disabled, LF/VT/FF advance
//! the row but leave the column untouched, as if every line were infinitely
//! long; callers measuring cursor displacement depend on this.
//!
//! Everything here is pure and stateless: no allocation in the scan loop, no
//! shared state, safe to call from any number of threads.
//!
//! # Example
//! ```
//! use textwidth::{text_offset, text_width};
//!
//! assert_eq!(text_width("1234", 0, 0), 4);
//! assert_eq!(text_width("你好", 0, 0), 4); // two wide characters
//!
//! // Soft wrap at column 10: two full rows plus five cells.
//! let off = text_offset("1234567890123456789012345", 0, 10);
//! assert_eq!((off.rows, off.column), (2, 5));
//! ```
//!
//! BiDi shaping, grapheme-cluster composition, and ANSI escape sequences are
//! out of scope: input is measured code point by code point, and escape
//! bytes count as ordinary control characters (zero width).

pub mod policy;
pub mod scan;

pub use policy::WidthPolicy;
pub use scan::{
    TextOffset, text_offset, text_offset_with_policy, text_width, text_width_with_policy,
};
