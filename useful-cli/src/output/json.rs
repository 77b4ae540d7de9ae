//! JSON output formatter

use super::{OutputFormatter, Record};
use crate::error::CliResult;
use std::io::Write;

/// JSON formatter - collects records and writes them as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Record>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_record(&mut self, record: &Record) -> CliResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> CliResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
