//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ActionFlow CLI - Turn meeting notes into structured action items.
#[derive(Debug, Parser)]
#[command(name = "actionflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ACTIONFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract action items from meeting notes
    Extract(ExtractArgs),

    /// Print the built-in sample meeting transcript
    Sample,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive mode
    Interactive,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Meeting notes text
    pub text: Option<String>,

    /// Read notes from a file
    #[arg(short = 'i', long = "file", conflicts_with_all = ["text", "stdin"])]
    pub file: Option<PathBuf>,

    /// Read notes from stdin
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Title for the extraction record
    #[arg(short, long, requires = "record")]
    pub title: Option<String>,

    /// Zoom meeting URL the notes came from
    #[arg(long, requires = "record")]
    pub source_url: Option<String>,

    /// Wrap the items in an extraction record
    #[arg(long)]
    pub record: bool,

    /// Print an aggregate summary after the items
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_no_command_defaults_to_interactive() {
        let cli = Cli::parse_from(["actionflow"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_extract_command() {
        let cli = Cli::parse_from([
            "actionflow",
            "extract",
            "Sarah will review the mockups by Friday",
            "--summary",
        ]);
        match cli.command {
            Some(Command::Extract(args)) => {
                assert_eq!(args.text.as_deref(), Some("Sarah will review the mockups by Friday"));
                assert!(args.summary);
                assert!(!args.record);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_extract_record_options() {
        let cli = Cli::parse_from([
            "actionflow",
            "extract",
            "--file",
            "notes.txt",
            "--record",
            "--title",
            "Team Sync",
            "--source-url",
            "https://zoom.us/j/123",
        ]);
        match cli.command {
            Some(Command::Extract(args)) => {
                assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
                assert_eq!(args.title.as_deref(), Some("Team Sync"));
                assert_eq!(args.source_url.as_deref(), Some("https://zoom.us/j/123"));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_title_requires_record() {
        let result = Cli::try_parse_from(["actionflow", "extract", "notes", "--title", "Sync"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_file_conflicts_with_text() {
        let result = Cli::try_parse_from(["actionflow", "extract", "notes", "--file", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["actionflow", "sample", "--format", "json", "--no-color", "-vv"]);
        assert!(matches!(cli.command, Some(Command::Sample)));
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["actionflow", "config", "init", "--force"]);
        match cli.command {
            Some(Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            })) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, OutputFormat::Quiet));
    }
}
