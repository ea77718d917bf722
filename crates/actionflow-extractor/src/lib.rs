//! ActionFlow Extractor
//!
//! Heuristic engine that turns free-form meeting notes into structured action
//! items.
//!
//! # Pipeline
//!
//! ```text
//! Text → Sentences → Action-verb filter → Owner → Deadline → Priority → Confidence → Top N
//! ```
//!
//! 1. **Segmentation**: split on `.`, `!`, `?` and newlines; drop pieces of ten
//!    characters or fewer once trimmed.
//! 2. **Action-verb filter**: keep sentences whose lowercase form contains a
//!    vocabulary phrase ("will", "need to", "follow up", ...).
//! 3. **Owner**: first recognized name, in table order, found in the sentence.
//! 4. **Deadline**: first deadline pattern, in table order, that matches;
//!    a leading "by"/"due" is stripped.
//! 5. **Priority**: urgency keywords, high before low, medium by default.
//! 6. **Confidence**: `0.5 + 0.2` plus `0.15` each for owner and deadline.
//! 7. **Assembly**: trimmed task text without bullet marker; at most 15 items.
//!
//! Extraction is pure and never fails. Only building an [`Extractor`] from a
//! custom [`ExtractorConfig`] can return an error.
//!
//! # Example Usage
//!
//! ```
//! use actionflow_extractor::{Extractor, ExtractorConfig};
//! use actionflow_domain::Priority;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//!
//! let report = extractor.extract_with_metadata(
//!     "- Mike will schedule the code review by end of week. It's critical.\n\
//!      Lisa should update the docs ASAP",
//! );
//!
//! assert_eq!(report.items.len(), 2);
//! assert_eq!(report.items[0].task, "Mike will schedule the code review by end of week");
//! assert_eq!(report.items[0].deadline.as_deref(), Some("end of week"));
//! assert_eq!(report.items[1].priority, Priority::High);
//! println!("Scanned {} sentences", report.metadata.sentences_scanned);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod deadline;
mod error;
mod extractor;
mod owner;
mod patterns;
mod priority;
mod scoring;
mod segmenter;
mod types;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use config::{ConfidenceWeights, DeadlinePatternDef, ExtractorConfig};
pub use error::ExtractorError;
pub use extractor::{extract_action_items, Extractor};
pub use segmenter::SentenceSegmenter;
pub use types::{ExtractionMetadata, ExtractionReport, ExtractionSummary};
