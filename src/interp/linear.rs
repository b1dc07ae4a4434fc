//! Bounding-segment search and linear evaluation.

use crate::criteria::Point;
use crate::error::RankError;
use crate::round::round4;

/// The two waypoints bounding a query value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSegment {
    /// Tightest waypoint below the query (or the first waypoint under
    /// the first-segment rule).
    pub start: Point,
    /// Tightest waypoint at or above the query.
    pub end: Point,
}

/// Locates the bounding segment for `x` in the waypoint sequence.
///
/// The waypoint x values are partitioned into those strictly below `x`
/// and those at or above it; `start` is the first waypoint carrying the
/// maximum of the lower set and `end` the first carrying the minimum of
/// the upper set (first match by index when duplicates exist).
///
/// **First-segment rule**: when `x` lies at or before the first
/// waypoint, the lower set is empty and both bounds shift one index
/// forward, so the segment becomes `[waypoints[0], waypoints[1]]` and
/// the value is evaluated on the first segment rather than extrapolated
/// before it. This mirrors the reference index arithmetic exactly.
///
/// # Errors
///
/// [`RankError::Computation`] for a sequence of fewer than two
/// waypoints, or when no waypoint bounds `x` from above (x beyond the
/// last waypoint).
pub fn bounding_segment(x: f64, waypoints: &[Point]) -> Result<BoundingSegment, RankError> {
    if waypoints.len() < 2 {
        return Err(RankError::Computation {
            x,
            detail: format!(
                "criterion defines {} waypoint(s) but interpolation needs at least two",
                waypoints.len()
            ),
        });
    }

    let lower_max = waypoints
        .iter()
        .map(|p| p.x)
        .filter(|&wx| wx < x)
        .fold(f64::NEG_INFINITY, f64::max);
    let upper_min = waypoints
        .iter()
        .map(|p| p.x)
        .filter(|&wx| wx >= x)
        .fold(f64::INFINITY, f64::min);

    let start_index = waypoints.iter().position(|p| p.x == lower_max);
    let end_index = waypoints.iter().position(|p| p.x == upper_min);

    let Some(end_index) = end_index else {
        return Err(RankError::Computation {
            x,
            detail: "no waypoint bounds the value from above".to_string(),
        });
    };

    match start_index {
        Some(start_index) => Ok(BoundingSegment {
            start: waypoints[start_index],
            end: waypoints[end_index],
        }),
        // Empty lower set: shift both indices forward one slot.
        None => {
            let end = waypoints.get(end_index + 1).ok_or_else(|| RankError::Computation {
                x,
                detail: "no segment after the waypoint matching the value".to_string(),
            })?;
            Ok(BoundingSegment {
                start: waypoints[0],
                end: *end,
            })
        }
    }
}

/// Evaluates the criterion's utility at `x` by linear interpolation on
/// the bounding segment, rounded to 4 significant digits.
///
/// # Errors
///
/// Everything [`bounding_segment`] raises, plus
/// [`RankError::Computation`] when the segment endpoints share an x
/// (undefined slope).
pub fn interpolate(x: f64, waypoints: &[Point]) -> Result<f64, RankError> {
    let segment = bounding_segment(x, waypoints)?;

    let run = segment.end.x - segment.start.x;
    if run == 0.0 {
        return Err(RankError::Computation {
            x,
            detail: format!("duplicate waypoint x = {}", segment.start.x),
        });
    }

    let slope = (segment.end.y - segment.start.y) / run;
    let y_intercept = segment.start.y - slope * segment.start.x;
    Ok(round4(slope * x + y_intercept))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn points(pairs: &[(f64, f64)]) -> Vec<Point> {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_midpoint_interpolation() {
        let wp = points(&[(0.0, 0.0), (10.0, 10.0)]);
        assert_eq!(interpolate(5.0, &wp).unwrap(), 5.0);
    }

    #[test]
    fn test_interior_segment_selection() {
        let wp = points(&[(0.0, 0.0), (10.0, 10.0), (20.0, 30.0)]);
        // x = 15 lies on the second segment: slope 2 through (10,10).
        assert_eq!(interpolate(15.0, &wp).unwrap(), 20.0);
    }

    #[test]
    fn test_exact_waypoint_hit() {
        let wp = points(&[(0.0, 2.0), (10.0, 8.0), (20.0, 20.0)]);
        assert_eq!(interpolate(10.0, &wp).unwrap(), 8.0);
    }

    #[test]
    fn test_first_segment_rule_at_first_waypoint() {
        // x = 0 matches the first waypoint; the shifted bounds select
        // the first segment and evaluate to its start y.
        let wp = points(&[(0.0, 2.0), (10.0, 8.0), (20.0, 20.0)]);
        let segment = bounding_segment(0.0, &wp).unwrap();
        assert_eq!(segment.start, Point::new(0.0, 2.0));
        assert_eq!(segment.end, Point::new(10.0, 8.0));
        assert_eq!(interpolate(0.0, &wp).unwrap(), 2.0);
    }

    #[test]
    fn test_first_segment_rule_below_first_waypoint() {
        // x below every waypoint still evaluates on the first segment
        // (its line extended leftward).
        let wp = points(&[(10.0, 10.0), (20.0, 30.0)]);
        assert_eq!(interpolate(5.0, &wp).unwrap(), 0.0);
    }

    #[test]
    fn test_decreasing_curve() {
        let wp = points(&[(0.0, 10.0), (400.0, 0.0)]);
        assert_eq!(interpolate(100.0, &wp).unwrap(), 7.5);
    }

    #[test]
    fn test_result_is_rounded() {
        // Slope 1/3 through the origin: y(1) = 0.3333...
        let wp = points(&[(0.0, 0.0), (3.0, 1.0)]);
        assert_eq!(interpolate(1.0, &wp).unwrap(), 0.3333);
    }

    #[test]
    fn test_too_few_waypoints() {
        let wp = points(&[(0.0, 0.0)]);
        assert!(matches!(
            interpolate(0.0, &wp).unwrap_err(),
            RankError::Computation { .. }
        ));
        assert!(matches!(
            interpolate(5.0, &[]).unwrap_err(),
            RankError::Computation { .. }
        ));
    }

    #[test]
    fn test_x_beyond_last_waypoint() {
        let wp = points(&[(0.0, 0.0), (10.0, 10.0)]);
        let err = interpolate(11.0, &wp).unwrap_err();
        assert!(matches!(err, RankError::Computation { x, .. } if x == 11.0));
    }

    #[test]
    fn test_duplicate_waypoint_x_is_undefined_slope() {
        // Both waypoints share x = 10; the first-segment rule selects
        // them as the bounds and the slope is undefined.
        let wp = points(&[(10.0, 5.0), (10.0, 10.0)]);
        let err = interpolate(10.0, &wp).unwrap_err();
        assert!(matches!(err, RankError::Computation { .. }));
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_duplicate_x_with_lower_bound_present() {
        // The upper set's first-match rule picks the first x = 10
        // entry, so a duplicate further out is never consulted.
        let wp = points(&[(0.0, 0.0), (10.0, 5.0), (10.0, 10.0)]);
        assert_eq!(interpolate(10.0, &wp).unwrap(), 5.0);
    }

    proptest! {
        #[test]
        fn prop_interior_result_within_segment_range(x in 0.0f64..10.0) {
            let wp = points(&[(0.0, 2.0), (10.0, 8.0)]);
            let y = interpolate(x, &wp).unwrap();
            prop_assert!((2.0..=8.0).contains(&y));
        }

        #[test]
        fn prop_waypoint_order_is_respected(x in -5.0f64..25.0) {
            // A three-segment profit curve covering the query range.
            let wp = points(&[(0.0, 0.0), (10.0, 4.0), (20.0, 9.0), (30.0, 10.0)]);
            let y = interpolate(x, &wp).unwrap();
            prop_assert!(y.is_finite());
        }
    }
}
