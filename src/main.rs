//! Binary entry point.
//!
//! Parses the command line, optionally enables debug logging, runs the
//! generator and prints the confirmation message.

use filegen_rs::{logging, Cli, FileGenerator};

fn main() {
    let cli = Cli::parse_args();

    // Logging failure is reported but does not stop the generation run
    if cli.debug {
        if let Err(err) = logging::init_debug_logging() {
            eprintln!("{}", err);
        }
    }

    let generator = FileGenerator::new();
    match generator.generate() {
        Ok(report) => {
            println!(
                "File created successfully at {}",
                report.output_path.display()
            );
        }
        Err(err) => {
            logging::error_log(&format!("Generation failed: {}", err));
            eprintln!("{}", err);
            if let Some(suggestion) = err.get_recovery_suggestion() {
                eprintln!("{}", suggestion);
            }
            std::process::exit(1);
        }
    }
}
