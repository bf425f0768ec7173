/// Largest length the coercions will produce: 2^53 - 1, the biggest integer a
/// double can represent exactly.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Coerces an optional numeric offset to a mathematical integer.
///
/// A missing value and NaN both become 0; fractional values truncate toward
/// zero; magnitudes beyond the `i64` range saturate at its limits. Total,
/// never fails.
pub fn to_integer(value: Option<f64>) -> i64 {
    match value {
        None => 0,
        Some(v) if v.is_nan() => 0,
        // float-to-int `as` saturates for out-of-range magnitudes
        Some(v) => v.trunc() as i64,
    }
}

/// Coerces a numeric value to a usable length.
///
/// NaN and negatives become 0, fractional values truncate toward zero, and the
/// result is clamped to [`MAX_SAFE_INTEGER`]. Total, never fails.
pub fn to_length(value: f64) -> u64 {
    if value.is_nan() || value <= 0.0 {
        return 0;
    }
    let truncated = value.trunc() as u64;
    truncated.min(MAX_SAFE_INTEGER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_integer_missing_and_nan_are_zero() {
        assert_eq!(to_integer(None), 0);
        assert_eq!(to_integer(Some(f64::NAN)), 0);
    }

    #[test]
    fn test_to_integer_truncates_toward_zero() {
        assert_eq!(to_integer(Some(2.9)), 2);
        assert_eq!(to_integer(Some(-2.9)), -2);
        assert_eq!(to_integer(Some(0.0)), 0);
        assert_eq!(to_integer(Some(-0.0)), 0);
    }

    #[test]
    fn test_to_integer_saturates() {
        assert_eq!(to_integer(Some(f64::INFINITY)), i64::MAX);
        assert_eq!(to_integer(Some(f64::NEG_INFINITY)), i64::MIN);
        assert_eq!(to_integer(Some(1e300)), i64::MAX);
    }

    #[test]
    fn test_to_length_floors_at_zero() {
        assert_eq!(to_length(f64::NAN), 0);
        assert_eq!(to_length(-1.0), 0);
        assert_eq!(to_length(-0.5), 0);
        assert_eq!(to_length(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_to_length_truncates_and_clamps() {
        assert_eq!(to_length(4.7), 4);
        assert_eq!(to_length(0.9), 0);
        assert_eq!(to_length(1e300), MAX_SAFE_INTEGER);
        assert_eq!(to_length(f64::INFINITY), MAX_SAFE_INTEGER);
    }
}
