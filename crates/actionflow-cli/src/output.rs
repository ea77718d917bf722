//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use actionflow_domain::{ActionItem, Confidence, Extraction, Priority};
use actionflow_extractor::ExtractionSummary;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format action items.
    pub fn format_items(&self, items: &[ActionItem]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
            OutputFormat::Table => Ok(self.format_items_table(items)),
            OutputFormat::Quiet => Ok(Self::format_items_quiet(items)),
        }
    }

    /// Format an extraction record.
    pub fn format_record(&self, record: &Extraction) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Quiet => Ok(record.id.to_string()),
            OutputFormat::Table => {
                let mut header = format!(
                    "{} ({}, {} item(s))",
                    record.title,
                    record.source.as_str(),
                    record.item_count()
                );
                if let Some(url) = &record.source_url {
                    header.push_str(&format!("\n{}", url));
                }
                Ok(format!(
                    "{}\n{}",
                    self.colorize(&header, "cyan"),
                    self.format_items_table(&record.action_items)
                ))
            }
        }
    }

    /// Format aggregate counts as a single line.
    pub fn format_summary(&self, summary: &ExtractionSummary) -> String {
        let line = format!(
            "{} action item(s): {} high, {} medium, {} low; {} assigned, {} with deadline; mean confidence {}%",
            summary.total,
            summary.high_priority,
            summary.medium_priority,
            summary.low_priority,
            summary.assigned,
            summary.with_deadline,
            Confidence::clamped(summary.mean_confidence).percent()
        );
        self.info(&line)
    }

    /// Format action items as a table.
    fn format_items_table(&self, items: &[ActionItem]) -> String {
        if items.is_empty() {
            return self.colorize("No action items found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Task", "Owner", "Deadline", "Priority", "Confidence"]);

        for item in items {
            builder.push_record([
                item.task.clone(),
                item.owner_label().to_string(),
                item.deadline_label().to_string(),
                self.priority_cell(item.priority),
                self.confidence_cell(item.confidence),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format action items in quiet mode (IDs only).
    fn format_items_quiet(items: &[ActionItem]) -> String {
        let ids: Vec<String> = items.iter().map(|i| i.id.to_string()).collect();
        ids.join("\n")
    }

    fn priority_cell(&self, priority: Priority) -> String {
        let color = match priority {
            Priority::High => "red",
            Priority::Medium => "yellow",
            Priority::Low => "green",
        };
        self.colorize(priority.as_str(), color)
    }

    fn confidence_cell(&self, confidence: Confidence) -> String {
        self.colorize(&format!("{}%", confidence.percent()), confidence_color(confidence))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format the result of an extraction run.
    pub fn extracted(&self, count: usize) -> String {
        self.success(&format!("Extracted {} action item(s)", count))
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "dimmed" => text.dimmed().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Color band for a confidence score: green from 80%, yellow from 60%.
pub fn confidence_color(confidence: Confidence) -> &'static str {
    let value = confidence.value();
    if value >= 0.8 {
        "green"
    } else if value >= 0.6 {
        "yellow"
    } else {
        "dimmed"
    }
}
