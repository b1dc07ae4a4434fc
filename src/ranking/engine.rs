//! Scoring engine and full-pipeline entry point.

use super::types::RankEntry;
use crate::criteria::{parse_criteria, Criterion};
use crate::error::RankError;
use crate::input;
use crate::interp::interpolate;
use crate::matrix::{parse_matrix, ValueMatrix};
use crate::round::round4;

/// Scores variant rows against an ordered criteria set.
///
/// The engine's criteria order defines which matrix column each
/// criterion scores. The engine is immutable after construction and
/// holds no state between calls.
///
/// # Examples
///
/// ```
/// use rankwise::criteria::{Criterion, Point, Polarity};
/// use rankwise::ranking::RankEngine;
///
/// let engine = RankEngine::new(vec![Criterion {
///     label: "quality".into(),
///     weight: 1.0,
///     polarity: Polarity::Profit,
///     waypoints: vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
/// }]);
///
/// assert_eq!(engine.score_row(&[5.0]).unwrap(), 5.0);
/// ```
pub struct RankEngine {
    criteria: Vec<Criterion>,
}

impl RankEngine {
    /// Creates an engine over an ordered criteria set.
    pub fn new(criteria: Vec<Criterion>) -> Self {
        Self { criteria }
    }

    /// The criteria, in column order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Number of criteria columns the engine expects.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Computes one variant's weighted aggregate utility.
    ///
    /// Each raw value is interpolated through its column's utility
    /// curve, multiplied by the criterion weight, and summed; the sum
    /// is rounded to 4 significant digits.
    ///
    /// # Errors
    ///
    /// [`RankError::ColumnCountMismatch`] when the row length differs
    /// from the criteria count, and [`RankError::Computation`] when any
    /// cell's interpolation is degenerate.
    pub fn score_row(&self, values: &[f64]) -> Result<f64, RankError> {
        if values.len() != self.criteria.len() {
            return Err(RankError::ColumnCountMismatch {
                values: values.len(),
                criteria: self.criteria.len(),
            });
        }

        let mut total = 0.0;
        for (value, criterion) in values.iter().zip(&self.criteria) {
            let utility = interpolate(*value, &criterion.waypoints)?;
            total += utility * criterion.weight;
        }
        Ok(round4(total))
    }

    /// Scores every matrix row and returns the ranking, stable-sorted
    /// ascending by score.
    ///
    /// # Errors
    ///
    /// Propagates the first [`RankError::Computation`] from any cell;
    /// no partial ranking is produced.
    pub fn rank(&self, matrix: &ValueMatrix) -> Result<Vec<RankEntry>, RankError> {
        let mut entries = Vec::with_capacity(matrix.height());
        for (label, row) in matrix.labels.iter().zip(&matrix.rows) {
            entries.push(RankEntry {
                label: label.clone(),
                score: self.score_row(row)?,
            });
        }

        // Stable sort: tied scores keep input order.
        entries.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(entries)
    }
}

/// Runs the full pipeline on raw input text: normalize lines, parse the
/// matrix, parse the criteria, rank.
///
/// The matrix is parsed before the criteria, so a malformed matrix is
/// reported even when the criteria are also invalid.
///
/// # Errors
///
/// Any [`RankError`] from parsing, validation, or interpolation.
pub fn rank_input(raw: &str) -> Result<Vec<RankEntry>, RankError> {
    let lines = input::lines(raw);
    let matrix = parse_matrix(&lines)?;
    let criteria = parse_criteria(&lines)?;
    RankEngine::new(criteria).rank(&matrix)
}
