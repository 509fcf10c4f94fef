//! Layout errors.

use thiserror::Error;

/// Errors produced by layout and hit-testing policy.
///
/// Every operation is total over valid inputs, so the only failure is a caller handing in
/// constants or rectangles that can’t describe real geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A numeric constant was non-positive or not finite, or a rectangle had a negative size.
    #[error("invalid configuration: {what} must be {expected}, got {value}")]
    InvalidConfiguration {
        what: &'static str,
        expected: &'static str,
        value: f64,
    },
}

impl LayoutError {
    pub(crate) fn invalid(what: &'static str, expected: &'static str, value: f64) -> LayoutError {
        LayoutError::InvalidConfiguration {
            what,
            expected,
            value,
        }
    }
}

pub type LayoutResult<T> = Result<T, LayoutError>;

/// Checks that a constant is finite and strictly positive.
pub fn require_positive(what: &'static str, value: f64) -> LayoutResult<f64> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(LayoutError::invalid(what, "positive and finite", value))
    }
}

/// Checks that a constant is finite and not negative.
pub fn require_non_negative(what: &'static str, value: f64) -> LayoutResult<f64> {
    if value.is_finite() && value >= 0. {
        Ok(value)
    } else {
        Err(LayoutError::invalid(what, "non-negative and finite", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_negative_and_nan() {
        assert_eq!(require_positive("row height", 24.), Ok(24.));
        assert!(require_positive("row height", 0.).is_err());
        assert!(require_positive("row height", -1.).is_err());
        assert!(require_positive("row height", f64::NAN).is_err());
        assert!(require_positive("row height", f64::INFINITY).is_err());
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(require_non_negative("margin", 0.), Ok(0.));
        assert!(require_non_negative("margin", -0.5).is_err());
    }

    #[test]
    fn message_names_the_constant() {
        let err = require_positive("max band height", -3.).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: max band height must be positive and finite, got -3"
        );
    }
}
