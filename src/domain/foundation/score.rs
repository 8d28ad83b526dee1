//! Score value object for literacy dimensions (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A literacy dimension score between 0 and 100 inclusive.
///
/// Carries fractional precision so jittered raw values survive until
/// aggregation rounds them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Zero points.
    pub const ZERO: Self = Self(0.0);

    /// Maximum score.
    pub const MAX: Self = Self(100.0);

    /// Creates a new Score, clamping to valid range.
    ///
    /// Non-finite input collapses to zero.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format("score", "not a finite number"));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns this score rounded to the nearest whole point.
    pub fn rounded(&self) -> Self {
        Self(self.0.round())
    }

    /// Returns the score rounded to the nearest whole point as an integer.
    pub fn as_points(&self) -> u8 {
        self.0.round() as u8
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_new_accepts_valid_values() {
        assert_eq!(Score::new(0.0).value(), 0.0);
        assert_eq!(Score::new(42.5).value(), 42.5);
        assert_eq!(Score::new(100.0).value(), 100.0);
    }

    #[test]
    fn score_new_clamps_out_of_range() {
        assert_eq!(Score::new(-3.0).value(), 0.0);
        assert_eq!(Score::new(104.9).value(), 100.0);
    }

    #[test]
    fn score_new_collapses_non_finite_to_zero() {
        assert_eq!(Score::new(f64::NAN).value(), 0.0);
        assert_eq!(Score::new(f64::INFINITY).value(), 0.0);
        assert_eq!(Score::new(f64::NEG_INFINITY).value(), 0.0);
    }

    #[test]
    fn score_try_new_accepts_valid_values() {
        assert!(Score::try_new(0.0).is_ok());
        assert!(Score::try_new(73.2).is_ok());
        assert!(Score::try_new(100.0).is_ok());
    }

    #[test]
    fn score_try_new_rejects_out_of_range() {
        let result = Score::try_new(100.5);
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "score");
                assert_eq!(min, 0.0);
                assert_eq!(max, 100.0);
                assert_eq!(actual, 100.5);
            }
            _ => panic!("Expected OutOfRange error"),
        }
        assert!(Score::try_new(-0.1).is_err());
    }

    #[test]
    fn score_try_new_rejects_nan() {
        assert!(Score::try_new(f64::NAN).is_err());
    }

    #[test]
    fn score_rounded_goes_to_nearest_integer() {
        assert_eq!(Score::new(72.4).rounded().value(), 72.0);
        assert_eq!(Score::new(72.5).rounded().value(), 73.0);
    }

    #[test]
    fn score_as_points_rounds() {
        assert_eq!(Score::new(79.6).as_points(), 80);
        assert_eq!(Score::new(79.4).as_points(), 79);
        assert_eq!(Score::MAX.as_points(), 100);
    }

    #[test]
    fn score_default_is_zero() {
        assert_eq!(Score::default(), Score::ZERO);
    }

    #[test]
    fn score_serializes_as_plain_number() {
        let score = Score::new(42.5);
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, "42.5");
    }

    #[test]
    fn score_deserializes_from_json() {
        let score: Score = serde_json::from_str("75.0").unwrap();
        assert_eq!(score.value(), 75.0);
    }

    #[test]
    fn score_ordering_works() {
        assert!(Score::new(25.0) < Score::new(75.0));
        assert!(Score::MAX > Score::ZERO);
    }
}
