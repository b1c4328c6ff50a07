mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docstats")]
#[command(about = "Rank documentation pages by views, completion and engagement", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Page catalog JSON file (defaults to the bundled sample catalog)"
    )]
    pub catalog: Option<PathBuf>,

    #[arg(long, global = true, help = "Config file (overrides DOCSTATS_CONFIG)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Log verbosity (defaults to RUST_LOG, then warn)")]
    pub log_level: Option<LogLevel>,

    #[arg(
        long,
        global = true,
        value_name = "YYYY-MM-DD",
        help = "Reference date for freshness (defaults to the local date)"
    )]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
