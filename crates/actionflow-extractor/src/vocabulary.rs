//! Built-in lookup tables
//!
//! These reproduce the fixed tables the engine ships with. Order matters for
//! names and deadline patterns: the first entry that matches wins.

use crate::config::DeadlinePatternDef;

const WEEKDAYS: &str = "monday|tuesday|wednesday|thursday|friday|saturday|sunday";

const MONTHS: &str =
    "january|february|march|april|may|june|july|august|september|october|november|december";

/// Phrases whose presence (as a lowercase substring) marks a sentence as actionable.
pub fn default_action_verbs() -> Vec<String> {
    [
        // modal / intent
        "will", "should", "must", "need to", "needs to", "going to",
        // task verbs
        "assign", "complete", "finish", "deliver", "send", "create", "review", "update",
        "schedule", "prepare", "submit", "implement", "follow up", "reach out", "contact",
        "set up", "organize",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Names recognized as owners, in lookup order.
pub fn default_recognized_names() -> Vec<String> {
    [
        "Sarah", "John", "Mike", "Lisa", "David", "Emma", "Alex", "Chris", "Jessica", "Ryan",
        "Amy", "Tom", "Rachel", "James", "Nicole",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Deadline patterns, in evaluation order.
///
/// Patterns are compiled case-insensitively. Digits are spelled `[0-9]` so that
/// only ASCII dates match.
pub fn default_deadline_patterns() -> Vec<DeadlinePatternDef> {
    vec![
        DeadlinePatternDef::new("by_weekday", format!("by ({WEEKDAYS})")),
        DeadlinePatternDef::new(
            "by_relative",
            "by (tomorrow|today|next week|end of (day|week|month))",
        ),
        DeadlinePatternDef::new("by_numeric_date", r"by ([0-9]{1,2}/[0-9]{1,2}(/[0-9]{2,4})?)"),
        DeadlinePatternDef::new("due_weekday", format!("due ({WEEKDAYS})")),
        DeadlinePatternDef::new("day_of_month", format!("([0-9]{{1,2}})(st|nd|rd|th)?( of)? ({MONTHS})")),
        DeadlinePatternDef::new("month_day", format!("({MONTHS}) ([0-9]{{1,2}})(st|nd|rd|th)?")),
        DeadlinePatternDef::new("within_span", "within ([0-9]+) (days?|weeks?|hours?)"),
        DeadlinePatternDef::new("abbreviation", "EOD|EOW|EOM"),
    ]
}

/// Terms that make an item high priority.
pub fn default_high_priority_terms() -> Vec<String> {
    ["urgent", "asap", "critical", "immediately", "high priority"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Terms that make an item low priority.
pub fn default_low_priority_terms() -> Vec<String> {
    ["when possible", "low priority", "eventually", "nice to have"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Meeting transcript used by `actionflow sample` and the integration tests.
pub const SAMPLE_TRANSCRIPT: &str = "Team Sync Meeting - December 27, 2024

[00:00] Sarah: Good morning everyone. Let's go through our updates and next steps.

[00:15] John: I've completed the initial design mockups. Sarah will need to review them by Friday.

[00:45] Mike: The API integration is almost done. I'll finish it by end of day tomorrow and then Lisa should test it.

[01:30] Lisa: Sounds good. I also need to update the documentation - that's high priority and should be done by Monday.

[02:00] Sarah: Great progress! David, can you follow up with the client about the timeline? They need an update by next Wednesday.

[02:30] David: Will do. Also, John needs to send me the latest assets ASAP for the presentation.

[03:00] Sarah: One more thing - Mike, please schedule a code review session with Alex by end of week. It's critical for the launch.

[03:30] John: I'll also create the user guide. It should be ready by January 5th.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(default_action_verbs().len(), 23);
        assert_eq!(default_recognized_names().len(), 15);
        assert_eq!(default_deadline_patterns().len(), 8);
    }

    #[test]
    fn test_name_order_starts_with_sarah_then_john() {
        let names = default_recognized_names();
        assert_eq!(names[0], "Sarah");
        assert_eq!(names[1], "John");
    }

    #[test]
    fn test_deadline_pattern_ids_are_unique() {
        let defs = default_deadline_patterns();
        let mut ids: Vec<_> = defs.iter().map(|d| d.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), defs.len());
    }
}
