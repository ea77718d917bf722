//! Compiled lookup tables
//!
//! Turns an [`ExtractorConfig`] into the matchers the stages run against. Built
//! once per extractor; read-only afterwards.

use crate::config::{DeadlinePatternDef, ExtractorConfig};
use crate::error::ExtractorError;
use regex::{Regex, RegexBuilder};

/// A compiled deadline pattern.
#[derive(Debug, Clone)]
pub(crate) struct DeadlinePattern {
    pub id: String,
    pub regex: Regex,
}

impl DeadlinePattern {
    fn compile(def: &DeadlinePatternDef) -> Result<Self, ExtractorError> {
        let regex = RegexBuilder::new(&def.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ExtractorError::InvalidPattern {
                id: def.id.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            id: def.id.clone(),
            regex,
        })
    }
}

/// Every table the pipeline stages need, in matchable form.
#[derive(Debug, Clone)]
pub(crate) struct CompiledTables {
    /// Lowercased action-verb phrases
    pub action_verbs: Vec<String>,
    /// Owner names, original case, in lookup order
    pub names: Vec<String>,
    /// Deadline patterns in evaluation order
    pub deadlines: Vec<DeadlinePattern>,
    /// `None` when no high-priority terms are configured
    pub high_priority: Option<Regex>,
    /// `None` when no low-priority terms are configured
    pub low_priority: Option<Regex>,
}

impl CompiledTables {
    pub fn compile(config: &ExtractorConfig) -> Result<Self, ExtractorError> {
        let deadlines = config
            .deadline_patterns
            .iter()
            .map(DeadlinePattern::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            action_verbs: config.action_verbs.iter().map(|v| v.to_lowercase()).collect(),
            names: config.recognized_names.clone(),
            deadlines,
            high_priority: compile_terms(&config.high_priority_terms)?,
            low_priority: compile_terms(&config.low_priority_terms)?,
        })
    }
}

/// Build one case-insensitive alternation out of literal terms.
fn compile_terms(terms: &[String]) -> Result<Option<Regex>, ExtractorError> {
    if terms.is_empty() {
        return Ok(None);
    }

    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|e| ExtractorError::InvalidTerms(e.to_string()))
}
