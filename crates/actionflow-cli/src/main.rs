//! ActionFlow CLI - Extract action items from meeting notes.

use actionflow_cli::commands;
use actionflow_cli::logging;
use actionflow_cli::repl;
use actionflow_cli::{Cli, Command, Config, Formatter};
use actionflow_extractor::Extractor;
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> actionflow_cli::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    // Load config, falling back to defaults when the file is absent
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Interactive) => {
            let extractor = Extractor::new(config.extractor)?;
            repl::run_repl(&extractor, &formatter)?;
        }
        Some(Command::Extract(args)) => {
            let extractor = Extractor::new(config.extractor)?;
            commands::execute_extract(args, &extractor, &formatter)?;
        }
        Some(Command::Sample) => {
            commands::execute_sample(&formatter);
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
