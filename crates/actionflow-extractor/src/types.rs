//! Result types for extraction

use actionflow_domain::{ActionItem, Priority};
use serde::{Deserialize, Serialize};

/// Items plus bookkeeping about how they were produced
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Extracted items, in source order
    pub items: Vec<ActionItem>,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Sentences long enough to be considered
    pub sentences_scanned: usize,

    /// Sentences that passed the action-verb filter
    pub sentences_qualified: usize,

    /// Qualifying sentences cut off by the item limit
    pub items_dropped: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl ExtractionMetadata {
    /// Whether the item limit cut off any qualifying sentence
    pub fn truncated(&self) -> bool {
        self.items_dropped > 0
    }
}

/// Aggregate counts over a set of action items
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExtractionSummary {
    /// Number of items
    pub total: usize,

    /// Items classified high priority
    pub high_priority: usize,

    /// Items classified medium priority
    pub medium_priority: usize,

    /// Items classified low priority
    pub low_priority: usize,

    /// Items with a recognized owner
    pub assigned: usize,

    /// Items with a deadline
    pub with_deadline: usize,

    /// Mean confidence, `0.0` for no items
    pub mean_confidence: f64,
}

impl ExtractionSummary {
    /// Summarize a slice of items
    pub fn from_items(items: &[ActionItem]) -> Self {
        let mut summary = Self {
            total: items.len(),
            ..Self::default()
        };

        let mut confidence_sum = 0.0;
        for item in items {
            match item.priority {
                Priority::High => summary.high_priority += 1,
                Priority::Medium => summary.medium_priority += 1,
                Priority::Low => summary.low_priority += 1,
            }
            if item.is_assigned() {
                summary.assigned += 1;
            }
            if item.has_deadline() {
                summary.with_deadline += 1;
            }
            confidence_sum += item.confidence.value();
        }

        if !items.is_empty() {
            summary.mean_confidence = confidence_sum / items.len() as f64;
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionflow_domain::Confidence;

    fn item(priority: Priority, owner: Option<&str>, deadline: Option<&str>, c: f64) -> ActionItem {
        ActionItem::new(
            "someone should do something",
            owner.map(str::to_string),
            deadline.map(str::to_string),
            priority,
            Confidence::clamped(c),
        )
    }

    #[test]
    fn test_empty_summary() {
        let summary = ExtractionSummary::from_items(&[]);
        assert_eq!(summary, ExtractionSummary::default());
    }

    #[test]
    fn test_summary_counts() {
        let items = vec![
            item(Priority::High, Some("Sarah"), Some("Friday"), 1.0),
            item(Priority::Medium, None, Some("EOD"), 0.85),
            item(Priority::Low, Some("John"), None, 0.85),
            item(Priority::High, None, None, 0.7),
        ];

        let summary = ExtractionSummary::from_items(&items);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.high_priority, 2);
        assert_eq!(summary.medium_priority, 1);
        assert_eq!(summary.low_priority, 1);
        assert_eq!(summary.assigned, 2);
        assert_eq!(summary.with_deadline, 2);
        assert!((summary.mean_confidence - 0.85).abs() < 1e-9);
    }

    #[test]
    fn test_metadata_truncated() {
        let mut metadata = ExtractionMetadata::default();
        assert!(!metadata.truncated());
        metadata.items_dropped = 5;
        assert!(metadata.truncated());
    }
}
