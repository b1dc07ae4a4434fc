//! Variant value matrix and its parser.
//!
//! The matrix section of the input declares its shape on the first two
//! lines (height, then width) and provides one line per variant:
//!
//! ```text
//! <height>
//! <width>
//! <label> <v1> <v2> ... <vN>
//! ```
//!
//! Variant lines are recognized by pattern, not position, so they may
//! be interleaved with criteria lines. The declared shape is validated
//! against the parsed rows in a single combined check.

mod parser;
mod types;

pub use parser::parse_matrix;
pub use types::ValueMatrix;
