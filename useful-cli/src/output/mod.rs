//! Output formatting module

use crate::error::CliResult;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One result produced by a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// An extracted or transformed string
    Text(String),
    /// The answer to a yes/no query
    Flag(bool),
    /// A batch of input lines
    Batch(Vec<String>),
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single record
    fn write_record(&mut self, record: &Record) -> CliResult<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> CliResult<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One record per line
    #[default]
    Text,
    /// JSON array of records
    Json,
}

/// Settings that shape the formatter output
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Selected format
    pub format: OutputFormat,
    /// Separator between batch items in text output
    pub separator: String,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

/// Build the formatter for `options` writing into `writer`
pub fn create_formatter<'w, W: Write + 'w>(
    options: &OutputOptions,
    writer: W,
) -> Box<dyn OutputFormatter + 'w> {
    match options.format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.separator.clone())),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
    }
}

/// Write every record and finish the output
pub fn write_all(formatter: &mut dyn OutputFormatter, records: &[Record]) -> CliResult<()> {
    for record in records {
        formatter.write_record(record)?;
    }
    formatter.finish()
}
