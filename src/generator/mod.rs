//! File generation module
//!
//! Computes the repetition count for the fixed line and writes the output file

pub mod writer;

pub use writer::FileGenerator;

use std::path::PathBuf;

/// Summary of a completed generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub lines_written: u64,
    pub bytes_written: u64,
}
