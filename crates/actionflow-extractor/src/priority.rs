//! Priority classification

use crate::patterns::CompiledTables;
use actionflow_domain::Priority;

/// Classify a sentence by its urgency terms. High-priority terms win over
/// low-priority ones.
pub(crate) fn classify_priority(sentence: &str, tables: &CompiledTables) -> Priority {
    let matches = |re: &Option<regex::Regex>| re.as_ref().is_some_and(|re| re.is_match(sentence));

    if matches(&tables.high_priority) {
        Priority::High
    } else if matches(&tables.low_priority) {
        Priority::Low
    } else {
        Priority::Medium
    }
}
