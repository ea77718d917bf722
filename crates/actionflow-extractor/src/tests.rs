//! Scenario and property tests for the Extractor

#[cfg(test)]
mod tests {
    use crate::{extract_action_items, Extractor, ExtractorConfig};
    use actionflow_domain::{Priority, NO_DEADLINE, UNASSIGNED};

    fn approx(value: f64, expected: f64) -> bool {
        (value - expected).abs() < 1e-9
    }

    #[test]
    fn test_owner_deadline_and_full_confidence() {
        let items = extract_action_items("Sarah will review the mockups by Friday. This is urgent.");

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.task, "Sarah will review the mockups by Friday");
        assert_eq!(item.owner.as_deref(), Some("Sarah"));
        assert_eq!(item.deadline.as_deref(), Some("Friday"));
        assert_eq!(item.priority, Priority::Medium);
        assert!(approx(item.confidence.value(), 1.0));
    }

    #[test]
    fn test_unassigned_without_deadline() {
        let items = extract_action_items("We need to finish the report.");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].owner_label(), UNASSIGNED);
        assert_eq!(items[0].deadline_label(), NO_DEADLINE);
        assert!(approx(items[0].confidence.value(), 0.7));
    }

    #[test]
    fn test_priority_terms_alone_do_not_qualify() {
        let items = extract_action_items("This report is nice to have eventually.");
        assert!(items.is_empty());
    }

    #[test]
    fn test_low_priority_on_qualifying_sentence() {
        let items = extract_action_items("We should refresh the logo eventually.");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].priority, Priority::Low);
    }

    #[test]
    fn test_owner_follows_table_order() {
        let items = extract_action_items("John and Sarah will sync on the launch plan.");
        assert_eq!(items[0].owner.as_deref(), Some("Sarah"));

        let items = extract_action_items("Nicole will brief Emma on the launch plan.");
        assert_eq!(items[0].owner.as_deref(), Some("Emma"));
    }

    #[test]
    fn test_truncates_to_fifteen_in_source_order() {
        let text: String = (0..20)
            .map(|i| format!("Task number {} will be completed. ", i))
            .collect();

        let items = extract_action_items(&text);
        assert_eq!(items.len(), 15);
        for (i, item) in items.iter().enumerate() {
            assert_eq!(item.task, format!("Task number {} will be completed", i));
        }
    }

    #[test]
    fn test_metadata_reports_truncation() {
        let text: String = (0..20)
            .map(|i| format!("Task number {} will be completed.\n", i))
            .collect();

        let extractor = Extractor::with_defaults().unwrap();
        let report = extractor.extract_with_metadata(&text);
        assert_eq!(report.metadata.sentences_scanned, 20);
        assert_eq!(report.metadata.sentences_qualified, 20);
        assert_eq!(report.metadata.items_dropped, 5);
        assert!(report.metadata.truncated());
    }

    #[test]
    fn test_short_sentences_with_verbs_are_skipped() {
        assert!(extract_action_items("I will go. Will do! Send it?").is_empty());
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(extract_action_items("").is_empty());
        assert!(extract_action_items("   \n\n\t  ").is_empty());
        assert!(extract_action_items("...!!!???").is_empty());
    }

    #[test]
    fn test_substring_verb_matching() {
        // "submitting" contains "submit"
        let items = extract_action_items("They are submitting the forms today");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].deadline, None);
    }

    #[test]
    fn test_bullet_list_notes() {
        let notes = "Action items:\n\
                     - Lisa will update the documentation by Monday\n\
                     • Ryan should contact the vendor within 3 days\n\
                     * Prepare the Q3 budget (high priority)";

        let items = extract_action_items(notes);
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].task, "Lisa will update the documentation by Monday");
        assert_eq!(items[0].owner.as_deref(), Some("Lisa"));
        assert_eq!(items[0].deadline.as_deref(), Some("Monday"));

        assert_eq!(items[1].task, "Ryan should contact the vendor within 3 days");
        assert_eq!(items[1].owner.as_deref(), Some("Ryan"));
        assert_eq!(items[1].deadline.as_deref(), Some("within 3 days"));

        assert_eq!(items[2].task, "Prepare the Q3 budget (high priority)");
        assert_eq!(items[2].owner, None);
        assert_eq!(items[2].priority, Priority::High);
        assert!(approx(items[2].confidence.value(), 0.7));
    }

    #[test]
    fn test_repeat_extraction_is_identical() {
        let text = "Mike will finish the API by end of day tomorrow. \
                    David should follow up with the client ASAP.";
        let first = extract_action_items(text);
        let second = extract_action_items(text);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert!(a.same_content(b));
        }
    }

    #[test]
    fn test_custom_tables() {
        let mut config = ExtractorConfig::default();
        config.recognized_names = vec!["Priya".to_string()];
        config.max_items = 1;

        let extractor = Extractor::new(config).unwrap();
        let items = extractor.extract("Priya will draft the memo. Sarah will review it afterwards.");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].owner.as_deref(), Some("Priya"));
    }

    #[test]
    fn test_custom_weights() {
        let mut config = ExtractorConfig::default();
        config.weights.base = 0.3;

        let extractor = Extractor::new(config).unwrap();
        let items = extractor.extract("We need to finish the report.");
        assert!(approx(items[0].confidence.value(), 0.5));
    }
}

#[cfg(test)]
mod proptests {
    use crate::extract_action_items;
    use crate::vocabulary::default_recognized_names;
    use proptest::prelude::*;

    const FRAGMENTS: &[&str] = &[
        "Sarah", "John", "Mike", "Lisa", "Tom", "Nicole", "will", "should", "need to",
        "follow up", "review", "the report", "the mockups", "by Friday", "due Monday",
        "by end of week", "by 3/14", "January 5th", "12th of March", "within 2 days", "EOD",
        "urgent", "ASAP", "eventually", "nice to have", "- ", "• ", ".", "!", "?", "\n", "and",
        "the client", "tomorrow",
    ];

    fn notes() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(FRAGMENTS), 0..120).prop_map(|parts| parts.join(" "))
    }

    proptest! {
        /// Property: never more than fifteen items
        #[test]
        fn test_item_limit(text in notes()) {
            prop_assert!(extract_action_items(&text).len() <= 15);
        }

        /// Property: arbitrary text never panics and respects the limit
        #[test]
        fn test_arbitrary_text(text in ".*") {
            prop_assert!(extract_action_items(&text).len() <= 15);
        }

        /// Property: confidence stays inside the unit interval
        #[test]
        fn test_confidence_range(text in notes()) {
            for item in extract_action_items(&text) {
                let c = item.confidence.value();
                prop_assert!((0.0..=1.0).contains(&c));
            }
        }

        /// Property: owners come from the recognized-names table
        #[test]
        fn test_owner_membership(text in notes()) {
            let names = default_recognized_names();
            for item in extract_action_items(&text) {
                if let Some(owner) = &item.owner {
                    prop_assert!(names.contains(owner));
                }
            }
        }

        /// Property: deadlines are non-empty and carry no by/due prefix
        #[test]
        fn test_deadline_normalized(text in notes()) {
            for item in extract_action_items(&text) {
                if let Some(deadline) = &item.deadline {
                    let lower = deadline.to_lowercase();
                    prop_assert!(!deadline.is_empty());
                    prop_assert!(!lower.starts_with("by "));
                    prop_assert!(!lower.starts_with("due "));
                }
            }
        }

        /// Property: classification is stable across runs
        #[test]
        fn test_repeatable(text in notes()) {
            let first = extract_action_items(&text);
            let second = extract_action_items(&text);
            prop_assert_eq!(first.len(), second.len());
            for (a, b) in first.iter().zip(&second) {
                prop_assert!(a.same_content(b));
            }
        }

        /// Property: text made only of short sentences yields nothing
        #[test]
        fn test_short_sentences_never_qualify(
            parts in prop::collection::vec("[a-z ]{0,10}", 0..20)
        ) {
            let text = parts.join(". ");
            prop_assert!(extract_action_items(&text).is_empty());
        }
    }
}
