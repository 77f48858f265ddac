//! File writer implementation.
//!
//! Implements the generation loop: compute how many copies of the line fit
//! under the target size, then write exactly that many copies.

use crate::constants::{LINE, OUTPUT_FILE_NAME, TARGET_SIZE_BYTES};
use crate::generator::GenerationReport;
use crate::{GenerateError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File generator that fills a file with repeated copies of a fixed line
#[derive(Debug, Clone)]
pub struct FileGenerator {
    /// Byte-size threshold the file size is computed against
    target_size: u64,
    /// Line written repeatedly, trailing newline included
    line: String,
    /// Path of the generated file
    output_path: PathBuf,
}

impl Default for FileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FileGenerator {
    /// Creates a generator with the production constants
    pub fn new() -> Self {
        Self {
            target_size: TARGET_SIZE_BYTES,
            line: LINE.to_string(),
            output_path: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }

    /// Creates a generator with explicit settings
    // AsRef allows us to accept a &Path or &str as output path
    pub fn with_settings<P: AsRef<Path>>(
        target_size: u64,
        line: &str,
        output_path: P,
    ) -> Result<Self> {
        // An empty line would make the repetition count a division by zero
        if line.is_empty() {
            return Err(GenerateError::InvalidLine(
                "Line cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            target_size,
            line: line.to_string(),
            output_path: output_path.as_ref().to_path_buf(),
        })
    }

    /// Number of times the line fits into the target size (floor division)
    pub fn repetition_count(&self) -> u64 {
        self.target_size / self.line.len() as u64
    }

    /// Final size of the generated file in bytes.
    /// Always <= target size, the shortfall is smaller than one line.
    pub fn expected_size(&self) -> u64 {
        self.repetition_count() * self.line.len() as u64
    }

    /// Path the output file is written to
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Creates the output file and writes the line `repetition_count` times.
    /// An existing file at the output path is truncated, not appended to.
    pub fn generate(&self) -> Result<GenerationReport> {
        let num_lines = self.repetition_count();
        crate::logging::debug_log(&format!(
            "Writing {} copies of a {} byte line to {}",
            num_lines,
            self.line.len(),
            self.output_path.display()
        ));

        // File::create truncates silently if the file already exists
        let file = File::create(&self.output_path).map_err(|e| {
            GenerateError::file_access_error(
                &self.output_path.to_string_lossy(),
                &format!("Failed to create output file: {}", e),
            )
        })?;

        // Buffered handle, dropped (and closed) on every exit path
        let mut writer = BufWriter::new(file);

        // One write per repetition, no separators beyond the line's own newline
        for _ in 0..num_lines {
            writer.write_all(self.line.as_bytes())?;
        }
        writer.flush()?;

        let report = GenerationReport {
            output_path: self.output_path.clone(),
            lines_written: num_lines,
            bytes_written: num_lines * self.line.len() as u64,
        };
        crate::logging::info_log(&format!(
            "Wrote {} lines ({} bytes) to {}",
            report.lines_written,
            report.bytes_written,
            report.output_path.display()
        ));
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Helper function to create a generator writing into a temp directory
    fn create_generator(dir: &Path, target_size: u64, line: &str) -> FileGenerator {
        FileGenerator::with_settings(target_size, line, dir.join("large-input.txt")).unwrap()
    }

    #[test]
    fn test_repetition_count_uses_floor_division() {
        let dir = tempdir().unwrap();
        let gen = create_generator(dir.path(), 100, "ab\n");
        assert_eq!(gen.repetition_count(), 33);
        assert_eq!(gen.expected_size(), 99);

        // Exact multiple of the line length
        let gen = create_generator(dir.path(), 99, "ab\n");
        assert_eq!(gen.repetition_count(), 33);
        assert_eq!(gen.expected_size(), 99);
    }

    #[test]
    fn test_generate_concrete_scenario() {
        // S = 100, L = "ab\n" -> 33 lines, 99 bytes
        let dir = tempdir().unwrap();
        let gen = create_generator(dir.path(), 100, "ab\n");
        let report = gen.generate().unwrap();

        assert_eq!(report.lines_written, 33);
        assert_eq!(report.bytes_written, 99);
        assert_eq!(fs::metadata(gen.output_path()).unwrap().len(), 99);
        assert_eq!(fs::read_to_string(gen.output_path()).unwrap(), "ab\n".repeat(33));
    }

    #[test]
    fn test_target_smaller_than_line_writes_empty_file() {
        // S = 2, L = "ab\n" -> 0 lines, the file exists with size 0
        let dir = tempdir().unwrap();
        let gen = create_generator(dir.path(), 2, "ab\n");
        let report = gen.generate().unwrap();

        assert_eq!(report.lines_written, 0);
        assert_eq!(report.bytes_written, 0);
        assert!(gen.output_path().exists());
        assert_eq!(fs::metadata(gen.output_path()).unwrap().len(), 0);
    }

    #[test]
    fn test_every_line_equals_the_line_constant() {
        let dir = tempdir().unwrap();
        let line = "This is a line of text.\n";
        let gen = create_generator(dir.path(), 1000, line);
        let report = gen.generate().unwrap();

        let content = fs::read_to_string(gen.output_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len() as u64, report.lines_written);
        for written in lines {
            assert_eq!(written, line.trim_end_matches('\n'));
        }
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = tempdir().unwrap();
        let gen = create_generator(dir.path(), 500, "repeat me\n");

        gen.generate().unwrap();
        let first = fs::read(gen.output_path()).unwrap();
        gen.generate().unwrap();
        let second = fs::read(gen.output_path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_overwrites_larger_existing_file() {
        // A second run with a smaller target must truncate, not append
        let dir = tempdir().unwrap();
        let path = dir.path().join("large-input.txt");

        let big = FileGenerator::with_settings(1000, "ab\n", &path).unwrap();
        big.generate().unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 999);

        let small = FileGenerator::with_settings(100, "ab\n", &path).unwrap();
        small.generate().unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 99);
    }

    #[test]
    fn test_empty_line_is_rejected() {
        let err = FileGenerator::with_settings(100, "", "large-input.txt").unwrap_err();
        assert!(matches!(err, GenerateError::InvalidLine(_)));
    }

    #[test]
    fn test_unwritable_path_fails_with_file_access_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("large-input.txt");
        let gen = FileGenerator::with_settings(100, "ab\n", &path).unwrap();

        let err = gen.generate().unwrap_err();
        assert!(matches!(err, GenerateError::FileAccessError { .. }));
    }

    #[test]
    fn test_multibyte_line_counts_bytes_not_chars() {
        // "é" is 2 bytes in UTF-8, so the line is 3 bytes long
        let dir = tempdir().unwrap();
        let gen = create_generator(dir.path(), 10, "é\n");
        assert_eq!(gen.repetition_count(), 3);

        let report = gen.generate().unwrap();
        assert_eq!(report.bytes_written, 9);
        assert_eq!(fs::metadata(gen.output_path()).unwrap().len(), 9);
    }

    #[test]
    fn test_production_constants_invariant() {
        // No file is written here, the default target is 10000 MiB
        let gen = FileGenerator::new();
        let line_len = crate::constants::LINE.len() as u64;

        assert_eq!(
            gen.repetition_count(),
            crate::constants::TARGET_SIZE_BYTES / line_len
        );
        assert!(gen.expected_size() <= crate::constants::TARGET_SIZE_BYTES);
        assert!(crate::constants::TARGET_SIZE_BYTES - gen.expected_size() < line_len);
        assert_eq!(
            gen.output_path(),
            Path::new(crate::constants::OUTPUT_FILE_NAME)
        );
    }
}
