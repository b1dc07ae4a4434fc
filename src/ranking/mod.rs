//! Weighted aggregation and ranking.
//!
//! [`RankEngine`] owns the parsed criteria (whose order fixes the
//! matrix column order) and scores variant rows by interpolating each
//! raw value through its criterion's utility curve, weighting, summing,
//! and rounding. [`rank_input`] runs the whole pipeline from raw text.
//!
//! Rankings are sorted ascending by score with ties keeping their
//! original relative order; whether "best" means lowest or highest is
//! the caller's interpretation, driven by the criteria polarities.

mod engine;
mod types;

pub use engine::{rank_input, RankEngine};
pub use types::RankEntry;
