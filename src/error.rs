//! Error taxonomy for parsing, validation, and interpolation.
//!
//! Every failure is immediately fatal: parsers validate eagerly and stop
//! at the first violation, and no partial ranking is ever produced. Each
//! message carries the offending label or value so the consumer layer can
//! print it verbatim.

use crate::criteria::Polarity;
use thiserror::Error;

/// All failure modes of the ranking pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// A criterion line's polarity marker is not exactly `+` or `-`.
    #[error("the function type sign for criterion '{label}' is invalid - expected '+' or '-' but received '{sign}'")]
    InvalidTypeSign {
        /// Label of the offending criterion.
        label: String,
        /// The marker actually found.
        sign: String,
    },

    /// Consecutive waypoint y values violate the direction required by
    /// the criterion's polarity (strictly increasing for profit,
    /// strictly decreasing for loss).
    #[error(
        "waypoints are invalid, criterion '{label}' is a {polarity} function but its y values are not strictly {}",
        .polarity.direction()
    )]
    InvalidWaypointMonotonicity {
        /// Label of the offending criterion.
        label: String,
        /// Declared polarity of the criterion.
        polarity: Polarity,
    },

    /// The criteria weights do not sum to 1 after rounding to 4
    /// significant digits.
    #[error("weights are invalid, the sum of weights should be 1 but it's {sum}")]
    InvalidWeightSum {
        /// The actual sum, rounded to 4 significant digits.
        sum: f64,
    },

    /// The declared matrix size does not match the parsed rows, or a
    /// cell failed to parse as a number.
    #[error("variants data is invalid - declared matrix size ({height}, {width}) does not reflect the size of the actual matrix or a value is not numeric")]
    InvalidMatrixShape {
        /// Height as declared on the first input line.
        height: f64,
        /// Width as declared on the second input line.
        width: f64,
    },

    /// A variant row carries a different number of values than there
    /// are criteria, so no meaningful weighted score exists.
    #[error("variant row has {values} value(s) but {criteria} criteria are defined")]
    ColumnCountMismatch {
        /// Number of raw values in the row.
        values: usize,
        /// Number of criteria the engine scores against.
        criteria: usize,
    },

    /// Degenerate interpolation input: too few waypoints, a duplicate
    /// waypoint x, or a query value no waypoint bounds from above.
    #[error("cannot interpolate at x = {x}: {detail}")]
    Computation {
        /// The raw value being evaluated.
        x: f64,
        /// What made the segment undefined.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_sign_message_names_criterion() {
        let err = RankError::InvalidTypeSign {
            label: "price".into(),
            sign: "*".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("price"));
        assert!(msg.contains('*'));
    }

    #[test]
    fn test_monotonicity_message_states_direction() {
        let err = RankError::InvalidWaypointMonotonicity {
            label: "noise".into(),
            polarity: Polarity::Loss,
        };
        let msg = err.to_string();
        assert!(msg.contains("loss"));
        assert!(msg.contains("decreasing"));
    }

    #[test]
    fn test_weight_sum_message_reports_sum() {
        let err = RankError::InvalidWeightSum { sum: 0.9 };
        assert!(err.to_string().contains("0.9"));
    }

    #[test]
    fn test_matrix_shape_message_renders_nan_size() {
        let err = RankError::InvalidMatrixShape {
            height: f64::NAN,
            width: 3.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("NaN"));
        assert!(msg.contains('3'));
    }
}
