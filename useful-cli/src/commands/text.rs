//! Text command implementation

use super::{IoArgs, Records};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Record;
use clap::{Args, Subcommand};
use useful_core::text::{self, Comparison};

/// Arguments for the text command
#[derive(Debug, Args)]
pub struct TextArgs {
    #[command(subcommand)]
    pub op: TextOp,

    #[command(flatten)]
    pub io: IoArgs,

    /// Compare needles case-sensitively (default from configuration)
    #[arg(long, global = true)]
    pub case_sensitive: bool,
}

/// Operations applied to each input line
#[derive(Debug, Clone, Subcommand)]
pub enum TextOp {
    /// Print whether the line contains the needle
    Contains {
        /// Text to search for
        needle: String,
    },
    /// Print the text after the first occurrence of the needle
    After {
        /// Text to search for
        needle: String,
    },
    /// Print the text after the last occurrence of the needle
    AfterLast {
        /// Text to search for
        needle: String,
    },
    /// Print the text before the first occurrence of the needle
    Before {
        /// Text to search for
        needle: String,
    },
    /// Print the text before the last occurrence of the needle
    BeforeLast {
        /// Text to search for
        needle: String,
    },
    /// Print a character range of the line, or nothing when out of range
    Substring {
        /// 0-based start character
        #[arg(long, allow_negative_numbers = true)]
        start: isize,
        /// Number of characters; 0 takes the rest of the line
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        length: isize,
    },
    /// Print the line without surrounding whitespace
    Trim,
}

impl TextOp {
    /// Apply the operation to one line
    pub fn apply(&self, line: &str, comparison: Comparison) -> Record {
        let extracted = match self {
            TextOp::Contains { needle } => {
                return Record::Flag(text::contains_value(line, needle, comparison))
            }
            TextOp::After { needle } => text::substring_after_value(line, needle, comparison),
            TextOp::AfterLast { needle } => {
                text::substring_after_last_value(line, needle, comparison)
            }
            TextOp::Before { needle } => text::substring_before_value(line, needle, comparison),
            TextOp::BeforeLast { needle } => {
                text::substring_before_last_value(line, needle, comparison)
            }
            TextOp::Substring { start, length } => text::substring_or_empty(line, *start, *length),
            TextOp::Trim => text::safe_trim(line).unwrap_or_default(),
        };
        Record::Text(extracted.to_string())
    }
}

impl TextArgs {
    /// Comparison after applying the command-line override
    pub fn comparison(&self, config: &CliConfig) -> Comparison {
        if self.case_sensitive {
            Comparison::CaseSensitive
        } else {
            config.text.comparison
        }
    }

    /// Execute the text command, returning one record per input line
    pub fn run(&self, config: &CliConfig) -> CliResult<Records> {
        let comparison = self.comparison(config);
        log::info!("Applying {:?} with {:?} comparison", self.op, comparison);

        let lines = self.io.read_lines()?;
        Ok(lines
            .iter()
            .map(|line| self.op.apply(line, comparison))
            .collect())
    }
}
