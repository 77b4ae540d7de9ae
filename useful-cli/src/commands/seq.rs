//! Sequence command implementation

use super::{IoArgs, Records};
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::Record;
use anyhow::Context;
use clap::{Args, Subcommand};
use useful_core::sequence;

/// Arguments for the seq command
#[derive(Debug, Args)]
pub struct SeqArgs {
    #[command(subcommand)]
    pub op: SeqOp,

    #[command(flatten)]
    pub io: IoArgs,

    /// Separator between batch items in text output (default from configuration)
    #[arg(long, value_name = "TEXT", global = true)]
    pub separator: Option<String>,
}

/// Operations over the input lines as one sequence
#[derive(Debug, Clone, Subcommand)]
pub enum SeqOp {
    /// Split the lines into consecutive batches
    Partition {
        /// Lines per batch (default from configuration, else 10)
        #[arg(long, value_name = "N")]
        size: Option<usize>,
    },
    /// Print a contiguous range of lines
    Page {
        /// 0-based index of the first line
        #[arg(long, allow_negative_numbers = true)]
        start: isize,
        /// Number of lines
        #[arg(long, allow_negative_numbers = true)]
        length: isize,
    },
}

impl SeqOp {
    /// Apply the operation to the whole sequence
    pub fn apply(&self, lines: Vec<String>, config: &CliConfig) -> CliResult<Records> {
        match self {
            SeqOp::Partition { size } => {
                let size = size.unwrap_or(config.sequence.partition_size);
                let batches = sequence::partition(lines, size)
                    .with_context(|| format!("Cannot partition into batches of {size}"))?;
                Ok(batches.map(Record::Batch).collect())
            }
            SeqOp::Page { start, length } => Ok(sequence::page(lines, *start, *length)
                .map(Record::Text)
                .collect()),
        }
    }
}

impl SeqArgs {
    /// Separator after applying the command-line override
    pub fn separator(&self, config: &CliConfig) -> String {
        self.separator
            .clone()
            .unwrap_or_else(|| config.sequence.separator.clone())
    }

    /// Execute the seq command
    pub fn run(&self, config: &CliConfig) -> CliResult<Records> {
        let lines = self.io.read_lines()?;
        log::info!("Applying {:?} to {} lines", self.op, lines.len());
        self.op.apply(lines, config)
    }
}
