//! Action item module - the unit of output of the extraction engine

use crate::confidence::Confidence;
use crate::priority::Priority;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire value written for an item without a recognized owner
pub const UNASSIGNED: &str = "Unassigned";

/// Wire value written for an item without a detected deadline
pub const NO_DEADLINE: &str = "No deadline";

/// Unique identifier for an action item based on UUIDv7
///
/// Identity only; two extractions of the same text produce equal items with
/// different ids. UUIDv7 needs no coordination, so concurrent extractions never
/// collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionItemId(u128);

impl ActionItemId {
    /// Generate a new UUIDv7-based ActionItemId
    ///
    /// # Examples
    ///
    /// ```
    /// use actionflow_domain::ActionItemId;
    ///
    /// let a = ActionItemId::new();
    /// let b = ActionItemId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an ActionItemId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an ActionItemId from its hyphenated UUID string
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid UUIDv7 string: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ActionItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActionItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for ActionItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ActionItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_string(&s).map_err(serde::de::Error::custom)
    }
}

/// A task extracted from one qualifying sentence of meeting notes
///
/// Items are value objects: built once by the engine and never mutated by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionItem {
    /// Unique identifier
    pub id: ActionItemId,

    /// Source sentence, trimmed, with any leading bullet marker removed
    pub task: String,

    /// Recognized name responsible for the task
    #[serde(with = "owner_wire")]
    pub owner: Option<String>,

    /// Normalized deadline phrase ("Friday", "end of week", "January 5th")
    #[serde(with = "deadline_wire")]
    pub deadline: Option<String>,

    /// Urgency class
    pub priority: Priority,

    /// Heuristic reliability score
    pub confidence: Confidence,
}

impl ActionItem {
    /// Create a new action item with a freshly generated id
    pub fn new(
        task: impl Into<String>,
        owner: Option<String>,
        deadline: Option<String>,
        priority: Priority,
        confidence: Confidence,
    ) -> Self {
        Self {
            id: ActionItemId::new(),
            task: task.into(),
            owner,
            deadline,
            priority,
            confidence,
        }
    }

    /// Owner for display, [`UNASSIGNED`] when absent
    pub fn owner_label(&self) -> &str {
        self.owner.as_deref().unwrap_or(UNASSIGNED)
    }

    /// Deadline for display, [`NO_DEADLINE`] when absent
    pub fn deadline_label(&self) -> &str {
        self.deadline.as_deref().unwrap_or(NO_DEADLINE)
    }

    /// Whether a recognized owner was found
    pub fn is_assigned(&self) -> bool {
        self.owner.is_some()
    }

    /// Whether a deadline was found
    pub fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }

    /// Compare everything except the id
    pub fn same_content(&self, other: &ActionItem) -> bool {
        self.task == other.task
            && self.owner == other.owner
            && self.deadline == other.deadline
            && self.priority == other.priority
            && self.confidence == other.confidence
    }
}

fn write_with_sentinel<S: Serializer>(
    value: &Option<String>,
    sentinel: &str,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(sentinel))
}

fn read_with_sentinel<'de, D: Deserializer<'de>>(
    sentinel: &str,
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| v != sentinel && !v.is_empty()))
}

mod owner_wire {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        write_with_sentinel(value, UNASSIGNED, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        read_with_sentinel(UNASSIGNED, deserializer)
    }
}

mod deadline_wire {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        write_with_sentinel(value, NO_DEADLINE, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        read_with_sentinel(NO_DEADLINE, deserializer)
    }
}
