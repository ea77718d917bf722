//! Extraction record - what a caller keeps after running the engine
//!
//! The engine returns bare [`ActionItem`]s. Callers that save results wrap them
//! together with the notes they came from and where those notes were obtained.

use crate::action_item::ActionItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Host fragment every Zoom recording URL carries
const ZOOM_HOST: &str = "zoom.us";

/// Unique identifier for a saved extraction (UUIDv7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExtractionId(u128);

impl ExtractionId {
    /// Generate a new UUIDv7-based ExtractionId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse an ExtractionId from its hyphenated UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }
}

impl Default for ExtractionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExtractionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for ExtractionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExtractionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// Where the notes of an extraction came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionSource {
    /// Pasted or loaded text
    Text,
    /// Transcript of a Zoom cloud recording
    Zoom,
}

impl ExtractionSource {
    /// Get the source name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionSource::Text => "text",
            ExtractionSource::Zoom => "zoom",
        }
    }
}

/// A saved extraction: notes plus the items pulled out of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extraction {
    /// Unique identifier
    pub id: ExtractionId,

    /// User supplied title, or a dated default
    pub title: String,

    /// Provenance of the notes
    pub source: ExtractionSource,

    /// Recording URL for transcript sources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Notes exactly as given to the engine
    pub raw_text: String,

    /// Engine output, unmodified
    pub action_items: Vec<ActionItem>,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Extraction {
    /// Wrap items extracted from pasted text
    pub fn from_text(title: &str, raw_text: impl Into<String>, action_items: Vec<ActionItem>) -> Self {
        Self::build(title, ExtractionSource::Text, None, raw_text.into(), action_items)
    }

    /// Wrap items extracted from a Zoom transcript
    ///
    /// The URL must point at zoom.us.
    pub fn from_zoom(
        title: &str,
        source_url: &str,
        raw_text: impl Into<String>,
        action_items: Vec<ActionItem>,
    ) -> Result<Self, String> {
        let source_url = source_url.trim();
        if source_url.is_empty() {
            return Err("Zoom URL is required".to_string());
        }
        if !source_url.contains(ZOOM_HOST) {
            return Err(format!("Please provide a valid Zoom URL: {}", source_url));
        }

        Ok(Self::build(
            title,
            ExtractionSource::Zoom,
            Some(source_url.to_string()),
            raw_text.into(),
            action_items,
        ))
    }

    fn build(
        title: &str,
        source: ExtractionSource,
        source_url: Option<String>,
        raw_text: String,
        action_items: Vec<ActionItem>,
    ) -> Self {
        let created_at = Utc::now();
        let title = match title.trim() {
            "" => default_title(&created_at),
            t => t.to_string(),
        };

        Self {
            id: ExtractionId::new(),
            title,
            source,
            source_url,
            raw_text,
            action_items,
            created_at,
        }
    }

    /// Number of wrapped items
    pub fn item_count(&self) -> usize {
        self.action_items.len()
    }
}

fn default_title(created_at: &DateTime<Utc>) -> String {
    format!("Extraction {}", created_at.format("%Y-%m-%d"))
}
