//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::error::CliResult;
use anyhow::Context;
use std::io::{self, Read};

/// Collect input lines from the files matching `patterns`, or from stdin
/// when no pattern is given
///
/// Files are read in sorted path order and their lines concatenated.
pub fn read_lines(patterns: &[String]) -> CliResult<Vec<String>> {
    if patterns.is_empty() {
        log::debug!("Reading input from stdin");
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(split_lines(&content));
    }

    let mut lines = Vec::new();
    for path in resolve_patterns(patterns)? {
        log::info!("Reading {}", path.display());
        lines.extend(split_lines(&FileReader::read_text(&path)?));
    }
    Ok(lines)
}

fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_lines_from_several_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "one\ntwo\n").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "three\r\nfour").unwrap();

        let pattern = format!("{}/*.txt", temp_dir.path().display());
        let lines = read_lines(&[pattern]).unwrap();
        assert_eq!(lines, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_split_lines_keeps_blank_lines() {
        assert_eq!(split_lines("a\n\n  \nb"), vec!["a", "", "  ", "b"]);
        assert!(split_lines("").is_empty());
    }
}
