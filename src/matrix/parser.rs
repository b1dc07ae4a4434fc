//! Matrix parsing and shape validation.

use super::types::ValueMatrix;
use crate::criteria::is_criteria_line;
use crate::error::RankError;

/// Parses the variant value matrix out of the normalized input sequence.
///
/// The first two lines declare height and width. Data lines are every
/// remaining line longer than one character that is not a criteria
/// line; the first whitespace-separated token is the variant label and
/// the rest are the raw values.
///
/// # Errors
///
/// [`RankError::InvalidMatrixShape`] when any cell fails to parse as a
/// number, the row count differs from the declared height, or any row's
/// length differs from the declared width. The error cites the declared
/// shape; an unparseable size line surfaces here too, as a NaN declared
/// dimension can never match an actual count.
pub fn parse_matrix(lines: &[&str]) -> Result<ValueMatrix, RankError> {
    let height = parse_size(lines.first());
    let width = parse_size(lines.get(1));

    // Size lines are excluded by the length-1 heuristic, criteria lines
    // by their sign prefix; everything else is variant data.
    let data: Vec<&str> = lines
        .iter()
        .filter(|line| line.chars().count() > 1 && !is_criteria_line(line))
        .copied()
        .collect();

    let labels: Vec<String> = data
        .iter()
        .map(|line| {
            line.split_whitespace()
                .next()
                .unwrap_or("")
                .to_string()
        })
        .collect();

    let rows: Vec<Vec<f64>> = data
        .iter()
        .map(|line| {
            line.split_whitespace()
                .skip(1)
                .map(|value| value.parse().unwrap_or(f64::NAN))
                .collect()
        })
        .collect();

    let cells_numeric = rows.iter().flatten().all(|value| !value.is_nan());
    let shape_valid = rows.len() as f64 == height
        && rows.iter().all(|row| row.len() as f64 == width);

    if !cells_numeric || !shape_valid {
        return Err(RankError::InvalidMatrixShape { height, width });
    }

    Ok(ValueMatrix { labels, rows })
}

fn parse_size(line: Option<&&str>) -> f64 {
    line.copied().unwrap_or("").parse().unwrap_or(f64::NAN)
}
