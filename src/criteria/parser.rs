//! Criteria-line parsing and validation.

use super::types::{Criterion, Point, Polarity};
use crate::error::RankError;
use crate::round::round4;

/// Returns `true` if the line declares a criterion: a `+` or `-`
/// followed by at least one more character.
pub fn is_criteria_line(line: &str) -> bool {
    (line.starts_with('+') || line.starts_with('-')) && line.chars().count() > 1
}

/// Parses every criteria line out of the normalized input sequence.
///
/// Non-criteria lines (the size lines and variant rows) are ignored.
/// The returned order matches appearance order, which must match the
/// matrix column order.
///
/// After all criteria parse individually, the weights are summed and
/// the total, rounded to 4 significant digits, must equal exactly 1.
///
/// # Errors
///
/// [`RankError::InvalidTypeSign`], [`RankError::InvalidWaypointMonotonicity`],
/// or [`RankError::InvalidWeightSum`], each naming the offending
/// criterion or value. Parsing stops at the first violation.
pub fn parse_criteria(lines: &[&str]) -> Result<Vec<Criterion>, RankError> {
    let criteria = lines
        .iter()
        .filter(|line| is_criteria_line(line))
        .map(|line| parse_criterion(line))
        .collect::<Result<Vec<_>, _>>()?;

    let total: f64 = criteria.iter().map(|c| c.weight).sum();
    let rounded = round4(total);
    if rounded != 1.0 {
        return Err(RankError::InvalidWeightSum { sum: rounded });
    }

    Ok(criteria)
}

/// Parses one criteria line: `<+|-> <label> <weight> (x1,y1) (x2,y2) ...`.
fn parse_criterion(line: &str) -> Result<Criterion, RankError> {
    let mut tokens = line.split_whitespace();

    let sign = tokens.next().unwrap_or("");
    let label = tokens.next().unwrap_or("").to_string();
    let weight = tokens
        .next()
        .unwrap_or("")
        .parse::<f64>()
        .unwrap_or(f64::NAN);

    let polarity = match sign {
        "+" => Polarity::Profit,
        "-" => Polarity::Loss,
        other => {
            return Err(RankError::InvalidTypeSign {
                label,
                sign: other.to_string(),
            })
        }
    };

    let waypoints: Vec<Point> = tokens.map(parse_waypoint).collect();
    check_monotonicity(&waypoints, polarity, &label)?;

    Ok(Criterion {
        label,
        weight,
        polarity,
        waypoints,
    })
}

/// Parses a `"(x,y)"` token into a waypoint.
///
/// The first and last characters are stripped and the remainder split
/// on the first comma. A half that fails to parse as a number yields a
/// NaN coordinate; NaN y values then fail the monotonicity check, so
/// malformed tokens never survive into a valid criterion.
fn parse_waypoint(token: &str) -> Point {
    let inner = token.get(1..token.len().saturating_sub(1)).unwrap_or("");
    let mut halves = inner.splitn(2, ',');
    let x = parse_coordinate(halves.next());
    let y = parse_coordinate(halves.next());
    Point::new(x, y)
}

fn parse_coordinate(text: Option<&str>) -> f64 {
    text.unwrap_or("").parse().unwrap_or(f64::NAN)
}

/// Every consecutive waypoint pair must move strictly in the direction
/// the polarity declares. NaN comparisons are false, so NaN-valued
/// waypoints fail here as well.
fn check_monotonicity(
    waypoints: &[Point],
    polarity: Polarity,
    label: &str,
) -> Result<(), RankError> {
    for pair in waypoints.windows(2) {
        let valid = match polarity {
            Polarity::Profit => pair[1].y > pair[0].y,
            Polarity::Loss => pair[1].y < pair[0].y,
        };
        if !valid {
            return Err(RankError::InvalidWaypointMonotonicity {
                label: label.to_string(),
                polarity,
            });
        }
    }
    Ok(())
}
