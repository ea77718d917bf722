//! Configuration for the Extractor

use crate::error::ExtractorError;
use crate::vocabulary;
use serde::{Deserialize, Serialize};

/// Definition of a single deadline pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlinePatternDef {
    /// Identifier used in logs and error messages
    pub id: String,

    /// Regular expression, compiled case-insensitively
    pub pattern: String,
}

impl DeadlinePatternDef {
    /// Create a new pattern definition
    pub fn new(id: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pattern: pattern.into(),
        }
    }
}

/// Addends of the confidence score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceWeights {
    /// Starting score of every item
    pub base: f64,

    /// Added for passing the action-verb filter (every item does)
    pub action_verb: f64,

    /// Added when an owner was recognized
    pub owner: f64,

    /// Added when a deadline was found
    pub deadline: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            base: 0.5,
            action_verb: 0.2,
            owner: 0.15,
            deadline: 0.15,
        }
    }
}

/// Configuration for the Extractor
///
/// Every table is ordered where order matters; see [`crate::vocabulary`] for the
/// built-in values. Keys missing from a TOML document fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Sentences whose trimmed length (in characters) is at most this are skipped
    pub min_sentence_chars: usize,

    /// Maximum number of items returned per extraction
    pub max_items: usize,

    /// Phrases that mark a sentence as actionable (lowercase substring match)
    pub action_verbs: Vec<String>,

    /// Owner names, searched in order (case-sensitive substring match)
    pub recognized_names: Vec<String>,

    /// Terms that classify an item as high priority
    pub high_priority_terms: Vec<String>,

    /// Terms that classify an item as low priority
    pub low_priority_terms: Vec<String>,

    /// Deadline patterns, evaluated in order
    pub deadline_patterns: Vec<DeadlinePatternDef>,

    /// Confidence score addends
    pub weights: ConfidenceWeights,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: 10,
            max_items: 15,
            action_verbs: vocabulary::default_action_verbs(),
            recognized_names: vocabulary::default_recognized_names(),
            high_priority_terms: vocabulary::default_high_priority_terms(),
            low_priority_terms: vocabulary::default_low_priority_terms(),
            deadline_patterns: vocabulary::default_deadline_patterns(),
            weights: ConfidenceWeights::default(),
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    ///
    /// Empty phrases are rejected because an empty substring matches every
    /// sentence.
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.max_items == 0 {
            return Err(ExtractorError::Config(
                "max_items must be greater than 0".to_string(),
            ));
        }
        if self.action_verbs.is_empty() {
            return Err(ExtractorError::Config(
                "action_verbs must not be empty".to_string(),
            ));
        }
        if self.action_verbs.iter().any(|v| v.trim().is_empty()) {
            return Err(ExtractorError::Config(
                "action_verbs must not contain blank phrases".to_string(),
            ));
        }
        if self.recognized_names.iter().any(|n| n.trim().is_empty()) {
            return Err(ExtractorError::Config(
                "recognized_names must not contain blank names".to_string(),
            ));
        }
        if self
            .high_priority_terms
            .iter()
            .chain(&self.low_priority_terms)
            .any(|t| t.trim().is_empty())
        {
            return Err(ExtractorError::Config(
                "priority terms must not be blank".to_string(),
            ));
        }
        if let Some(def) = self.deadline_patterns.iter().find(|d| d.pattern.is_empty()) {
            return Err(ExtractorError::Config(format!(
                "deadline pattern '{}' is empty",
                def.id
            )));
        }

        let w = &self.weights;
        if ![w.base, w.action_verb, w.owner, w.deadline]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(ExtractorError::Config(
                "confidence weights must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
