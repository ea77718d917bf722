//! ActionFlow Domain Layer
//!
//! Value types shared by the extraction engine and its collaborators.
//!
//! ## Key Concepts
//!
//! - **Action item**: a task pulled out of one sentence of meeting notes, with an
//!   optional owner, an optional deadline, a priority and a confidence score
//! - **Priority**: `high`, `medium` (default) or `low`
//! - **Confidence**: heuristic reliability score, always within `[0, 1]`
//! - **Extraction**: the record a caller stores after running the engine; the
//!   engine itself never builds or reads it
//!
//! ## Wire format
//!
//! Owner and deadline are `Option<String>` in memory. On the wire an absent owner
//! is written as [`UNASSIGNED`] and an absent deadline as [`NO_DEADLINE`], so the
//! JSON shape stays `{id, task, owner, deadline, priority, confidence}`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action_item;
pub mod confidence;
pub mod extraction;
pub mod priority;

// Re-exports for convenience
pub use action_item::{ActionItem, ActionItemId, NO_DEADLINE, UNASSIGNED};
pub use confidence::Confidence;
pub use extraction::{Extraction, ExtractionId, ExtractionSource};
pub use priority::Priority;
