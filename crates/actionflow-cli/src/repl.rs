//! Interactive mode.
//!
//! Lines are collected into a notes buffer; an empty line runs the extractor over
//! the buffer and clears it. Lines starting with `:` are commands.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use actionflow_extractor::vocabulary::SAMPLE_TRANSCRIPT;
use actionflow_extractor::Extractor;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::debug;

/// Run interactive mode.
pub fn run_repl(extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("ActionFlow - paste meeting notes, then an empty line to extract. ':help' for commands")
    );
    println!();

    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e))))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut buffer = NotesBuffer::default();

    loop {
        let prompt = if buffer.is_empty() { "notes> " } else { "  ...> " };

        match editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str()).ok();
                }

                match parse_line(&line) {
                    ReplInput::Exit => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    ReplInput::Help => print_help(formatter),
                    ReplInput::Clear => {
                        buffer.clear();
                        println!("{}", formatter.info("Notes cleared"));
                    }
                    ReplInput::Sample => {
                        println!("{}", SAMPLE_TRANSCRIPT);
                        println!();
                        extract_and_print(SAMPLE_TRANSCRIPT, extractor, formatter);
                    }
                    ReplInput::Submit => match buffer.take() {
                        Some(notes) => extract_and_print(&notes, extractor, formatter),
                        None => eprintln!("{}", formatter.warning(&CliError::EmptyInput.to_string())),
                    },
                    ReplInput::Unknown(command) => {
                        eprintln!(
                            "{}",
                            formatter.error(&format!("Unknown command: {}. Type ':help' for available commands.", command))
                        );
                    }
                    ReplInput::Text(text) => buffer.push(&text),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use ':quit' to exit"));
            }
            Err(ReadlineError::Eof) => {
                if let Some(notes) = buffer.take() {
                    extract_and_print(&notes, extractor, formatter);
                }
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum ReplInput {
    Exit,
    Help,
    Clear,
    Sample,
    Submit,
    Unknown(String),
    Text(String),
}

fn parse_line(line: &str) -> ReplInput {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return ReplInput::Submit;
    }

    match trimmed.strip_prefix(':') {
        Some("quit" | "q" | "exit") => ReplInput::Exit,
        Some("help" | "?") => ReplInput::Help,
        Some("clear") => ReplInput::Clear,
        Some("sample") => ReplInput::Sample,
        Some(other) => ReplInput::Unknown(other.to_string()),
        None => ReplInput::Text(line.to_string()),
    }
}

/// Notes collected across prompt lines.
#[derive(Debug, Default)]
struct NotesBuffer {
    text: String,
}

impl NotesBuffer {
    fn push(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn clear(&mut self) {
        self.text.clear();
    }

    /// Take the buffered notes, or `None` when they are blank.
    fn take(&mut self) -> Option<String> {
        let notes = std::mem::take(&mut self.text);
        if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        }
    }
}

fn extract_and_print(notes: &str, extractor: &Extractor, formatter: &Formatter) {
    let report = extractor.extract_with_metadata(notes);
    debug!("Interactive extraction took {} ms", report.metadata.processing_time_ms);

    if report.items.is_empty() {
        println!("{}", formatter.info("No action items found"));
        println!();
        return;
    }

    match formatter.format_items(&report.items) {
        Ok(output) => println!("{}", output),
        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
    }
    if report.metadata.truncated() {
        println!(
            "{}",
            formatter.warning(&format!(
                "{} more action item(s) were found but not shown",
                report.metadata.items_dropped
            ))
        );
    }
    println!("{}", formatter.extracted(report.items.len()));
    println!();
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <text>            - Add a line of meeting notes");
    println!("  <empty line>      - Extract action items from the notes so far");
    println!("  :sample           - Extract from the built-in sample transcript");
    println!("  :clear            - Discard the notes so far");
    println!("  :help, :?         - Show this help");
    println!("  :quit, :exit, :q  - Exit");
    println!();
}
