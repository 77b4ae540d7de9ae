//! `useful` command-line entry point

use clap::Parser;
use useful_cli::{Cli, CliResult};

fn main() -> CliResult<()> {
    Cli::parse().execute()
}
