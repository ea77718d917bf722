//! Sample command implementation.

use crate::output::Formatter;
use actionflow_extractor::vocabulary::SAMPLE_TRANSCRIPT;

/// Execute the sample command.
pub fn execute_sample(formatter: &Formatter) {
    println!("{}", SAMPLE_TRANSCRIPT);
    eprintln!(
        "{}",
        formatter.info("Pipe this into `actionflow extract --stdin` to try the extractor")
    );
}
