//! Confidence score module

use serde::{Deserialize, Serialize};

/// Heuristic reliability score of an extracted action item
///
/// Always within `[0.0, 1.0]`. Construction clamps out-of-range input instead of
/// rejecting it, so a scorer can add its weights freely and rely on the bound.
/// On the wire this is a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Lowest possible score
    pub const MIN: Confidence = Confidence(0.0);

    /// Highest possible score
    pub const MAX: Confidence = Confidence(1.0);

    /// Create a confidence score, clamping into `[0, 1]`
    ///
    /// NaN maps to `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use actionflow_domain::Confidence;
    ///
    /// assert_eq!(Confidence::clamped(1.3).value(), 1.0);
    /// assert_eq!(Confidence::clamped(0.7).value(), 0.7);
    /// ```
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw score
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Score as a whole percentage, rounded half away from zero
    pub fn percent(&self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::clamped(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_above_one() {
        assert_eq!(Confidence::clamped(1.0000001).value(), 1.0);
        assert_eq!(Confidence::clamped(42.0), Confidence::MAX);
    }

    #[test]
    fn test_clamps_below_zero() {
        assert_eq!(Confidence::clamped(-0.5), Confidence::MIN);
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(Confidence::clamped(f64::NAN), Confidence::MIN);
    }

    #[test]
    fn test_percent() {
        assert_eq!(Confidence::clamped(0.7).percent(), 70);
        assert_eq!(Confidence::clamped(0.85).percent(), 85);
        assert_eq!(Confidence::MAX.percent(), 100);
    }

    #[test]
    fn test_deserialize_clamps() {
        let c: Confidence = serde_json::from_str("1.5").unwrap();
        assert_eq!(c, Confidence::MAX);
    }
}
