//! Constants used throughout the application.
//!
//! This module provides the fixed generation inputs: target size, line
//! content and output path.

/// Target size of the output file in bytes (10000 MiB).
pub const TARGET_SIZE_BYTES: u64 = 10_000 * 1024 * 1024;

/// Line written repeatedly to fill the file. The trailing newline is part of
/// the line and counts toward its byte length.
pub const LINE: &str =
    "This is a line of text to be transformed. Adding more text to increase the size of each line.\n";

/// Relative path of the generated file.
pub const OUTPUT_FILE_NAME: &str = "large-input.txt";
