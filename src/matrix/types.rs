//! Matrix types.

/// The validated variant-by-criterion value matrix.
///
/// `labels[i]` names the variant whose raw values are `rows[i]`;
/// `rows[i][j]` is the raw value of variant i under criterion j (column
/// order matches the criteria declaration order). Shape and cell
/// numericity are validated at parse time, so every row has the
/// declared width and every cell is a finite number.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValueMatrix {
    /// Variant labels, in input order.
    pub labels: Vec<String>,

    /// Raw value rows, parallel to `labels`.
    pub rows: Vec<Vec<f64>>,
}

impl ValueMatrix {
    /// Number of variants.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of criteria columns (0 for an empty matrix).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }
}
