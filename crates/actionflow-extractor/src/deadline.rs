//! Deadline detection and normalization

use crate::patterns::DeadlinePattern;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

static BY_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^by\s+").expect("valid by-prefix regex"));
static DUE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^due\s+").expect("valid due-prefix regex"));

/// Find the deadline phrase of a sentence.
///
/// Patterns run in table order; the first one that matches anywhere in the
/// sentence decides, using its leftmost match. A match that normalizes to an
/// empty string is skipped.
pub(crate) fn detect_deadline(sentence: &str, patterns: &[DeadlinePattern]) -> Option<String> {
    for pattern in patterns {
        let Some(found) = pattern.regex.find(sentence) else {
            continue;
        };

        let normalized = normalize(found.as_str());
        if normalized.is_empty() {
            trace!(pattern = %pattern.id, "deadline match normalized to nothing");
            continue;
        }

        trace!(pattern = %pattern.id, deadline = %normalized, "deadline matched");
        return Some(normalized);
    }
    None
}

/// Strip a leading "by " and then a leading "due ", keeping the rest verbatim.
pub(crate) fn normalize(matched: &str) -> String {
    let without_by = BY_PREFIX.replace(matched, "");
    DUE_PREFIX.replace(&without_by, "").into_owned()
}
