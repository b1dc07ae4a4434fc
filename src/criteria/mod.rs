//! Criterion definitions and the criteria-line parser.
//!
//! A criterion is a weighted scoring dimension with a monotonic
//! piecewise-linear utility curve: *profit* curves rise with the raw
//! value, *loss* curves fall. Criteria are declared one per text line:
//!
//! ```text
//! <+|-> <label> <weight> (x1,y1) (x2,y2) ...
//! ```
//!
//! The parser validates the polarity marker, the per-criterion waypoint
//! monotonicity, and (across the whole set) that the weights sum to 1
//! after rounding to 4 significant digits.

mod parser;
mod types;

pub use parser::{is_criteria_line, parse_criteria};
pub use types::{Criterion, Point, Polarity};
