//! Multi-criteria variant ranking framework.
//!
//! Ranks a set of decision "variants" (products, candidates, suppliers)
//! against multiple weighted criteria. Each criterion maps a raw numeric
//! value to a utility score through a user-defined piecewise-linear
//! function, and the weighted utilities aggregate into a single score
//! per variant:
//!
//! - **Criteria parsing**: text lines describing weighted profit/loss
//!   utility functions as monotonic waypoint sequences.
//! - **Matrix parsing**: text lines describing the variant-by-criterion
//!   value matrix with labels and a declared shape.
//! - **Interpolation**: bounding-segment search over the waypoints plus
//!   linear evaluation, rounded to 4 significant digits.
//! - **Ranking**: weighted aggregation and a stable ascending sort.
//!
//! # Architecture
//!
//! The crate is a pure, synchronous library: no I/O, no shared state, no
//! randomness. File reading, argument handling, and presentation are left
//! to thin wrappers at the consumer layer. Every entry point takes its
//! input as an argument and returns `Result<_, RankError>`.
//!
//! # Input format
//!
//! ```text
//! <height>
//! <width>
//! <label> <v1> <v2> ... <vN>                       one line per variant
//! <+|-> <criterion> <weight> (x1,y1) (x2,y2) ...   one line per criterion
//! ```
//!
//! Criteria lines and variant lines are recognized by pattern and may be
//! interleaved; only the two size lines are positional.
//!
//! # Example
//!
//! ```
//! use rankwise::ranking::rank_input;
//!
//! let input = "\
//! 2
//! 2
//! basic 5 100
//! pro 9 200
//! + quality 0.6 (0,0) (10,10)
//! - price 0.4 (0,10) (400,0)
//! ";
//!
//! let ranking = rank_input(input).unwrap();
//! assert_eq!(ranking.len(), 2);
//! assert!(ranking[0].score <= ranking[1].score);
//! ```

pub mod criteria;
pub mod error;
pub mod input;
pub mod interp;
pub mod matrix;
pub mod ranking;
pub mod round;
