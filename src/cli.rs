//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap. Generation inputs
//! (target size, line content, output path) are compile-time constants,
//! so the only runtime option is debug logging.

use clap::Parser;

/// Large Input File Generator - builds a multi-gigabyte text file from a repeated line
#[derive(Parser, Debug)]
#[command(
    name = "filegen-rs",
    about = "Large Input File Generator - fills large-input.txt with a repeated line",
    long_about = "Large Input File Generator - writes a fixed line of text into large-input.txt
    until the 10000 MiB size target is reached, then prints a confirmation message

    EXAMPLES:
        filegen-rs            # Generate large-input.txt in the current directory
        filegen-rs -d         # Same, with debug logging to a /tmp file

    USAGE TIP:
        The file is overwritten if it already exists
    "
)]
#[command(version)]
pub struct Cli {
    /// debug mode
    #[arg(
        short,
        long,
        help = "Debug mode (logging to /tmp file with timestamps)"
    )]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
