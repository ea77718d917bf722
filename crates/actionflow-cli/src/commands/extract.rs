//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use actionflow_domain::{ActionItem, Extraction};
use actionflow_extractor::{ExtractionSummary, Extractor};
use std::fs;
use std::io::{self, Read};
use tracing::debug;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    let text = read_notes(&args)?;
    let outcome = run_extraction(&text, &args, extractor)?;

    println!("{}", render(&outcome, formatter)?);
    for line in status_lines(&outcome, formatter) {
        eprintln!("{}", line);
    }

    Ok(())
}

/// Everything produced by one extraction run.
#[derive(Debug)]
pub struct ExtractOutcome {
    /// Extracted items, in source order
    pub items: Vec<ActionItem>,
    /// Record wrapping the items, when one was requested
    pub record: Option<Extraction>,
    /// Aggregate counts, when requested
    pub summary: Option<ExtractionSummary>,
    /// Qualifying sentences cut off by the item limit
    pub items_dropped: usize,
}

/// Validate the notes and run the extractor.
pub fn run_extraction(text: &str, args: &ExtractArgs, extractor: &Extractor) -> Result<ExtractOutcome> {
    if text.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }

    let report = extractor.extract_with_metadata(text);
    debug!(
        "Scanned {} sentence(s), {} qualified, {} dropped",
        report.metadata.sentences_scanned, report.metadata.sentences_qualified, report.metadata.items_dropped
    );

    let summary = args.summary.then(|| ExtractionSummary::from_items(&report.items));
    let record = if args.record {
        Some(build_record(args, text, report.items.clone())?)
    } else {
        None
    };

    Ok(ExtractOutcome {
        items: report.items,
        record,
        summary,
        items_dropped: report.metadata.items_dropped,
    })
}

fn read_notes(args: &ExtractArgs) -> Result<String> {
    if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(file_path) = &args.file {
        Ok(fs::read_to_string(file_path)?)
    } else if let Some(text) = &args.text {
        Ok(text.clone())
    } else {
        Err(CliError::InvalidInput(
            "Provide notes as an argument, with --file, or with --stdin".to_string(),
        ))
    }
}

fn build_record(args: &ExtractArgs, text: &str, items: Vec<ActionItem>) -> Result<Extraction> {
    let title = args.title.as_deref().unwrap_or_default();
    match &args.source_url {
        Some(url) => Extraction::from_zoom(title, url, text, items).map_err(CliError::InvalidInput),
        None => Ok(Extraction::from_text(title, text, items)),
    }
}

fn render(outcome: &ExtractOutcome, formatter: &Formatter) -> Result<String> {
    match &outcome.record {
        Some(record) => formatter.format_record(record),
        None => formatter.format_items(&outcome.items),
    }
}

/// Human-facing status messages, written to stderr so stdout stays parseable.
fn status_lines(outcome: &ExtractOutcome, formatter: &Formatter) -> Vec<String> {
    let mut lines = Vec::new();

    if outcome.items.is_empty() {
        if formatter.format() != OutputFormat::Table {
            lines.push(formatter.info("No action items found"));
        }
        lines.push(formatter.info("Try adding clearer action statements with owners and deadlines"));
    } else if formatter.format() == OutputFormat::Table {
        lines.push(formatter.extracted(outcome.items.len()));
    }

    if outcome.items_dropped > 0 {
        lines.push(formatter.warning(&format!(
            "{} more action item(s) were found but not shown",
            outcome.items_dropped
        )));
    }

    if let Some(summary) = &outcome.summary {
        lines.push(formatter.format_summary(summary));
    }

    lines
}
