//! Significant-digit rounding.
//!
//! The entire pipeline rounds to 4 *significant digits*, not decimal
//! places: `0.123456` becomes `0.1235` and `12345.6` becomes `12350`.
//! Interpolated utilities are rounded per cell, the weighted sum is
//! rounded once more, and the criteria weight-sum check compares the
//! rounded total against 1.

/// Number of significant digits used throughout the pipeline.
pub const SIGNIFICANT_DIGITS: u32 = 4;

/// Rounds `value` to `digits` significant digits (round half away from
/// zero, as decimal string conversion does).
///
/// Zero and non-finite values pass through unchanged.
///
/// # Examples
///
/// ```
/// use rankwise::round::round_sig;
///
/// assert_eq!(round_sig(0.123456, 4), 0.1235);
/// assert_eq!(round_sig(12345.6, 4), 12350.0);
/// assert_eq!(round_sig(-0.0012344, 4), -0.001234);
/// ```
pub fn round_sig(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits as i32 - 1 - magnitude);
    (value * factor).round() / factor
}

/// Rounds to the pipeline-wide [`SIGNIFICANT_DIGITS`].
pub fn round4(value: f64) -> f64 {
    round_sig(value, SIGNIFICANT_DIGITS)
}
