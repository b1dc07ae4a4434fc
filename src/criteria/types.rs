//! Core criterion types.

use std::fmt;

/// One waypoint of a criterion's piecewise-linear utility function.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Raw-value coordinate.
    pub x: f64,
    /// Utility coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a waypoint.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Direction of a criterion's utility curve.
///
/// The only behavioral divergence between the two polarities is the
/// monotonicity check applied to the waypoint y values; interpolation
/// and aggregation are polarity-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    /// Utility rises with the raw value (declared with `+`).
    Profit,

    /// Utility falls with the raw value (declared with `-`).
    Loss,
}

impl Polarity {
    /// The direction the waypoint y values must strictly follow.
    pub fn direction(&self) -> &'static str {
        match self {
            Polarity::Profit => "increasing",
            Polarity::Loss => "decreasing",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Profit => write!(f, "profit"),
            Polarity::Loss => write!(f, "loss"),
        }
    }
}

/// A weighted scoring dimension with a monotonic utility curve.
///
/// Waypoints keep the order they were declared in (ascending x by
/// convention; they are never re-sorted). The criterion's position in
/// the parsed sequence determines which matrix column it scores.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    /// Identifier used in validation messages.
    pub label: String,

    /// Contribution to the aggregate score, in [0, 1]. All criterion
    /// weights together must sum to 1.
    pub weight: f64,

    /// Whether the utility curve rises or falls with the raw value.
    pub polarity: Polarity,

    /// The utility curve, as declared.
    pub waypoints: Vec<Point>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_direction() {
        assert_eq!(Polarity::Profit.direction(), "increasing");
        assert_eq!(Polarity::Loss.direction(), "decreasing");
    }

    #[test]
    fn test_polarity_display() {
        assert_eq!(Polarity::Profit.to_string(), "profit");
        assert_eq!(Polarity::Loss.to_string(), "loss");
    }
}
