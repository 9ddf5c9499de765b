//! Validated block dimensions.
//!
//! A [`Dimension`] is a finite `f64` strictly greater than zero. The only way
//! to obtain one is through [`Dimension::new`] or [`Dimension::parse`], so any
//! shape built from dimensions is valid for its whole lifetime.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::core::errors::ValidationError;
use crate::core::kind::Field;

/// A finite, strictly positive length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dimension(f64);

impl Dimension {
    /// Validate a numeric value for `field`.
    pub fn new(field: Field, value: f64) -> Result<Dimension, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite {
                field,
                input: value.to_string(),
            });
        }
        // Rejects -0.0 as well.
        if value <= 0.0 {
            return Err(ValidationError::NotPositive { field, value });
        }
        Ok(Dimension(value))
    }

    /// Parse and validate raw user text for `field`.
    ///
    /// `None` and blank input are reported as missing.
    pub fn parse(field: Field, raw: Option<&str>) -> Result<Dimension, ValidationError> {
        let input = match raw.map(str::trim) {
            Some(s) if !s.is_empty() => s,
            _ => return Err(ValidationError::Missing { field }),
        };

        let value: f64 = input.parse().map_err(|_| ValidationError::NotNumeric {
            field,
            input: input.to_string(),
        })?;

        if !value.is_finite() {
            return Err(ValidationError::NotFinite {
                field,
                input: input.to_string(),
            });
        }

        Dimension::new(field, value)
    }

    #[inline]
    pub fn get(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_values_accepted() {
        for raw in ["5", "5.0", " 0.001 ", "1e3", "+2.5"] {
            let dim = Dimension::parse(Field::Radius, Some(raw)).unwrap();
            assert!(dim.get() > 0.0);
        }
    }

    #[test]
    fn test_display_drops_trailing_zero() {
        assert_eq!(Dimension::new(Field::Base, 5.0).unwrap().to_string(), "5");
        assert_eq!(Dimension::new(Field::Base, 2.5).unwrap().to_string(), "2.5");
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        for raw in ["0", "0.0", "-0.0", "-1", "-1e-9"] {
            let err = Dimension::parse(Field::Radius, Some(raw)).unwrap_err();
            assert!(
                matches!(err, ValidationError::NotPositive { field: Field::Radius, .. }),
                "{raw}: {err:?}"
            );
        }
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = Dimension::parse(Field::SideLength, Some("five")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotNumeric {
                field: Field::SideLength,
                input: "five".to_string()
            }
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        for raw in ["inf", "-inf", "NaN", "1e400"] {
            let err = Dimension::parse(Field::Height, Some(raw)).unwrap_err();
            assert!(
                matches!(err, ValidationError::NotFinite { field: Field::Height, .. }),
                "{raw}: {err:?}"
            );
        }
        assert!(Dimension::new(Field::Height, f64::NAN).is_err());
    }

    #[test]
    fn test_missing_rejected() {
        assert_eq!(
            Dimension::parse(Field::Base, None).unwrap_err(),
            ValidationError::Missing { field: Field::Base }
        );
        assert_eq!(
            Dimension::parse(Field::Base, Some("   ")).unwrap_err(),
            ValidationError::Missing { field: Field::Base }
        );
    }
}
