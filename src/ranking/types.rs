//! Ranking output types.

/// One entry of the final ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankEntry {
    /// The variant's label.
    pub label: String,

    /// Weighted aggregate utility, rounded to 4 significant digits.
    pub score: f64,
}
