use crate::error::{MiningError, Result};

// Relative slack in ulps; absorbs float noise such as 0.1 * 30 = 3.0000000000000004.
const CEIL_ULPS: f64 = 4.0;

/// Convert a raw minimum support into an absolute transaction count.
///
/// A value in `(0, 1]` is a fraction of `num_transactions` and is rounded up
/// (never below 1). A value above 1 is already an absolute count and is
/// truncated.
///
/// ```
/// use armine::resolve_threshold;
///
/// assert_eq!(resolve_threshold(0.5, 4).unwrap(), 2);
/// assert_eq!(resolve_threshold(0.34, 3).unwrap(), 2);
/// assert_eq!(resolve_threshold(2.0, 100).unwrap(), 2);
/// ```
pub fn resolve_threshold(min_support: f64, num_transactions: usize) -> Result<usize> {
    if !min_support.is_finite() || min_support <= 0.0 {
        return Err(MiningError::InvalidThreshold(min_support));
    }

    if min_support <= 1.0 {
        let scaled = min_support * num_transactions as f64;
        let slack = scaled * CEIL_ULPS * f64::EPSILON;
        let count = (scaled - slack).ceil().max(0.0) as usize;
        Ok(count.max(1))
    } else {
        Ok(min_support.floor() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_rounds_up() {
        assert_eq!(resolve_threshold(0.5, 4).unwrap(), 2);
        assert_eq!(resolve_threshold(0.34, 3).unwrap(), 2);
        assert_eq!(resolve_threshold(0.1, 30).unwrap(), 3);
        assert_eq!(resolve_threshold(1.0, 7).unwrap(), 7);
    }

    #[test]
    fn test_fraction_just_above_integer_rounds_up() {
        assert_eq!(resolve_threshold(0.5000000001, 4).unwrap(), 3);
        assert_eq!(resolve_threshold(0.3, 10).unwrap(), 3);
        assert_eq!(resolve_threshold(0.7, 10).unwrap(), 7);
    }

    #[test]
    fn test_fraction_floored_at_one() {
        assert_eq!(resolve_threshold(0.01, 10).unwrap(), 1);
        assert_eq!(resolve_threshold(0.5, 0).unwrap(), 1);
    }

    #[test]
    fn test_absolute_count_truncates() {
        assert_eq!(resolve_threshold(2.0, 1).unwrap(), 2);
        assert_eq!(resolve_threshold(2.0, 1000).unwrap(), 2);
        assert_eq!(resolve_threshold(3.9, 10).unwrap(), 3);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            resolve_threshold(0.0, 10),
            Err(MiningError::InvalidThreshold(0.0))
        );
        assert!(resolve_threshold(-0.5, 10).is_err());
        assert!(resolve_threshold(f64::NAN, 10).is_err());
    }
}
