//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use rotolog_core::Level;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rotolog")]
#[command(version, about = "Rotating file logger with console flood suppression")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase diagnostic verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log file path
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Console verbosity, -1 (silent) to 4 (everything); out-of-range
    /// values fall back to 2
    #[arg(long, allow_negative_numbers = true, global = true)]
    pub verbosity: Option<i64>,

    /// Rotation threshold in bytes
    #[arg(long, global = true)]
    pub max_size: Option<i64>,

    /// Number of rotated backup files to keep
    #[arg(long, global = true)]
    pub max_backups: Option<i64>,

    /// Config file (.toml or .json); flags override file values
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log one message
    Write(WriteArgs),

    /// Write a section separator to the log file
    Break,

    /// Drive the mixed-level demo loop (squares at rotating levels)
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct WriteArgs {
    /// Message level: error, warning, default, info, debug or 0-4
    #[arg(short, long, default_value = "default")]
    pub level: Level,

    /// Message text; multiple arguments are joined with spaces
    #[arg(required = true)]
    pub message: Vec<String>,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Highest integer to square
    #[arg(long, default_value_t = 256)]
    pub count: u32,
}
