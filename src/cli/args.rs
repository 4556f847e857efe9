//! CLI argument structures

use clap::Parser;
use std::path::PathBuf;

/// Keep columns 1 and 4 of every data row of a CSV file
#[derive(Parser, Debug)]
#[command(name = "fixer")]
#[command(
    about = "fixer - Project columns 1 and 4 of a CSV file into `<a>, <b>` lines",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Input CSV file (default: data.csv, or FIXER_INPUT)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file (default: data_fixed.csv, or FIXER_OUTPUT)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file (default: ./fixer.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
