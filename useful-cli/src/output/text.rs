//! Plain text output formatter

use super::{OutputFormatter, Record};
use crate::error::CliResult;
use std::io::Write;
use useful_core::text::join;

/// Plain text formatter - outputs one record per line
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a text formatter joining batch items with `separator`
    pub fn new(writer: W, separator: String) -> Self {
        Self { writer, separator }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_record(&mut self, record: &Record) -> CliResult<()> {
        match record {
            Record::Text(text) => writeln!(self.writer, "{text}")?,
            Record::Flag(flag) => writeln!(self.writer, "{flag}")?,
            Record::Batch(items) => {
                writeln!(self.writer, "{}", join(items, self.separator.as_str()))?
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> CliResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batches_use_separator() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer, ", ".to_string());
        formatter
            .write_record(&Record::Batch(vec!["1".to_string(), "2".to_string()]))
            .unwrap();
        formatter.write_record(&Record::Batch(vec![])).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "1, 2\n\n");
    }

    #[test]
    fn test_text_is_written_verbatim() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer, ",".to_string());
        formatter
            .write_record(&Record::Text("  padded  ".to_string()))
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "  padded  \n");
    }
}
