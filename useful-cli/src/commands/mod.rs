//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::input;
use crate::output::{self, OutputFormat, OutputOptions, Record};
use clap::{Args, Parser, Subcommand};
use std::io;
use std::path::PathBuf;

pub mod seq;
pub mod text;

/// Null-tolerant text and sequence helpers on the command line
#[derive(Debug, Parser)]
#[command(name = "useful", version, about)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true, env = "USEFUL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search and extract text on every input line
    Text(text::TextArgs),

    /// Partition or page the input lines
    Seq(seq::SeqArgs),
}

/// Input and output options shared by all commands
#[derive(Debug, Clone, Default, Args)]
pub struct IoArgs {
    /// Input files or patterns (supports glob); stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", global = true)]
    pub input: Vec<String>,

    /// Output format (default from configuration, else text)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);
        let config = CliConfig::load(self.config.as_deref())?;

        let (io_args, records) = match &self.command {
            Commands::Text(args) => (&args.io, args.run(&config)?),
            Commands::Seq(args) => (&args.io, args.run(&config)?),
        };
        log::info!("Produced {} records", records.len());

        let options = OutputOptions {
            format: io_args.format.unwrap_or(config.output.format),
            separator: self.separator(&config),
            pretty_json: config.output.pretty_json,
        };
        let stdout = io::stdout();
        let mut formatter = output::create_formatter(&options, stdout.lock());
        output::write_all(formatter.as_mut(), &records)
    }

    fn separator(&self, config: &CliConfig) -> String {
        match &self.command {
            Commands::Seq(args) => args.separator(config),
            Commands::Text(_) => config.sequence.separator.clone(),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> CliResult<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

impl IoArgs {
    /// Read the input lines selected by these options
    pub fn read_lines(&self) -> CliResult<Vec<String>> {
        input::read_lines(&self.input)
    }
}

/// Common shape of command results
pub type Records = Vec<Record>;
