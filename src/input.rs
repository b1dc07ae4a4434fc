//! Input line normalization.
//!
//! The parsers operate on a normalized line sequence: line endings
//! unified, surrounding whitespace trimmed, blank lines dropped. This
//! module provides that normalization so the library can be driven
//! end to end from a raw text blob; reading the text from a file or
//! stdin stays at the consumer layer.

/// Splits raw input text into trimmed, non-empty lines.
///
/// CRLF endings are handled by trimming, so Windows and Unix input
/// produce identical sequences. Returned slices borrow from `raw`.
///
/// # Examples
///
/// ```
/// let lines = rankwise::input::lines("3\r\n\r\n  2  \n");
/// assert_eq!(lines, vec!["3", "2"]);
/// ```
pub fn lines(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_drops_empty_lines() {
        let raw = "  a b \n\n\t\nc\n";
        assert_eq!(lines(raw), vec!["a b", "c"]);
    }

    #[test]
    fn test_crlf_input() {
        let raw = "2\r\n3\r\nA 1 2 3\r\n";
        assert_eq!(lines(raw), vec!["2", "3", "A 1 2 3"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(lines("").is_empty());
        assert!(lines("\n\r\n \n").is_empty());
    }
}
