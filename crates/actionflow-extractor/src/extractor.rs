//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::deadline::detect_deadline;
use crate::error::ExtractorError;
use crate::owner::detect_owner;
use crate::patterns::CompiledTables;
use crate::priority::classify_priority;
use crate::scoring::score;
use crate::segmenter::SentenceSegmenter;
use crate::types::{ExtractionMetadata, ExtractionReport};
use actionflow_domain::ActionItem;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Instant;
use tracing::{debug, info};

static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-•*]\s*").expect("valid bullet marker regex"));

static DEFAULT_EXTRACTOR: Lazy<Extractor> =
    Lazy::new(|| Extractor::with_defaults().expect("built-in tables compile"));

/// Extract action items from meeting notes using the built-in tables.
///
/// The tables are compiled once per process on first use.
///
/// # Examples
///
/// ```
/// use actionflow_extractor::extract_action_items;
///
/// let items = extract_action_items("Sarah will review the mockups by Friday. This is urgent.");
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].owner.as_deref(), Some("Sarah"));
/// assert_eq!(items[0].deadline.as_deref(), Some("Friday"));
/// ```
pub fn extract_action_items(text: &str) -> Vec<ActionItem> {
    DEFAULT_EXTRACTOR.extract(text)
}

/// The Extractor turns free-form notes into structured action items
///
/// Holds only immutable compiled tables, so one instance can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Extractor {
    tables: CompiledTables,
    segmenter: SentenceSegmenter,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor, validating and compiling the configured tables
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        let tables = CompiledTables::compile(&config)?;

        debug!(
            "Compiled extractor tables: {} verbs, {} names, {} deadline patterns",
            tables.action_verbs.len(),
            tables.names.len(),
            tables.deadlines.len()
        );

        Ok(Self {
            tables,
            segmenter: SentenceSegmenter::new(config.min_sentence_chars),
            config,
        })
    }

    /// Create an Extractor with the built-in tables
    pub fn with_defaults() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// The configuration this extractor was built from
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract action items from text
    ///
    /// Never fails; text without qualifying sentences yields an empty vector.
    pub fn extract(&self, text: &str) -> Vec<ActionItem> {
        self.extract_with_metadata(text).items
    }

    /// Extract action items and report how the text was processed
    pub fn extract_with_metadata(&self, text: &str) -> ExtractionReport {
        let start_time = Instant::now();

        let sentences = self.segmenter.segment(text);
        let max_items = self.config.max_items;

        let mut items = Vec::new();
        let mut qualified = 0;

        for sentence in &sentences {
            if !self.has_action_verb(sentence) {
                continue;
            }
            qualified += 1;

            if items.len() < max_items {
                items.push(self.build_item(sentence));
            }
        }

        let metadata = ExtractionMetadata {
            sentences_scanned: sentences.len(),
            sentences_qualified: qualified,
            items_dropped: qualified - items.len(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        if metadata.truncated() {
            debug!(
                "Item limit {} reached, dropped {} qualifying sentences",
                max_items, metadata.items_dropped
            );
        }

        info!(
            "Extraction complete: {} items from {} sentences ({} qualified)",
            items.len(),
            metadata.sentences_scanned,
            metadata.sentences_qualified
        );

        ExtractionReport { items, metadata }
    }

    /// Whether the lowercased sentence contains any action-verb phrase
    fn has_action_verb(&self, sentence: &str) -> bool {
        let lower = sentence.to_lowercase();
        self.tables
            .action_verbs
            .iter()
            .any(|verb| lower.contains(verb.as_str()))
    }

    /// Run owner, deadline, priority and scoring stages on a qualifying sentence
    fn build_item(&self, sentence: &str) -> ActionItem {
        let owner = detect_owner(sentence, &self.tables.names).map(str::to_string);
        let deadline = detect_deadline(sentence, &self.tables.deadlines);
        let priority = classify_priority(sentence, &self.tables);
        let confidence = score(&self.config.weights, owner.is_some(), deadline.is_some());

        ActionItem::new(clean_task(sentence), owner, deadline, priority, confidence)
    }
}

/// Trim a sentence and drop one leading bullet marker.
fn clean_task(sentence: &str) -> String {
    BULLET_MARKER.replace(sentence.trim(), "").into_owned()
}
