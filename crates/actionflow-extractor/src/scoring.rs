//! Confidence scoring

use crate::config::ConfidenceWeights;
use actionflow_domain::Confidence;

/// Score an item that passed the action-verb filter.
///
/// The action-verb addend always applies since only qualifying sentences reach
/// this stage. The sum is clamped into `[0, 1]`.
pub(crate) fn score(weights: &ConfidenceWeights, has_owner: bool, has_deadline: bool) -> Confidence {
    let mut confidence = weights.base + weights.action_verb;

    if has_owner {
        confidence += weights.owner;
    }
    if has_deadline {
        confidence += weights.deadline;
    }

    Confidence::clamped(confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(c: Confidence, expected: f64) -> bool {
        (c.value() - expected).abs() < 1e-9
    }

    #[test]
    fn test_verb_only() {
        let w = ConfidenceWeights::default();
        assert!(approx(score(&w, false, false), 0.7));
    }

    #[test]
    fn test_owner_or_deadline() {
        let w = ConfidenceWeights::default();
        assert!(approx(score(&w, true, false), 0.85));
        assert!(approx(score(&w, false, true), 0.85));
    }

    #[test]
    fn test_everything_reaches_one() {
        let w = ConfidenceWeights::default();
        assert!(approx(score(&w, true, true), 1.0));
        assert!(score(&w, true, true).value() <= 1.0);
    }

    #[test]
    fn test_oversized_weights_are_clamped() {
        let w = ConfidenceWeights {
            base: 0.9,
            action_verb: 0.5,
            owner: 0.5,
            deadline: 0.5,
        };
        assert_eq!(score(&w, true, true), Confidence::MAX);
    }

    #[test]
    fn test_negative_weights_are_clamped() {
        let w = ConfidenceWeights {
            base: -2.0,
            action_verb: 0.0,
            owner: 0.0,
            deadline: 0.0,
        };
        assert_eq!(score(&w, false, false), Confidence::MIN);
    }
}
