use std::path::PathBuf;

use clap::Parser;

use crate::storage::StorageMode;

/// Food storage — an interactive manager for a fixed-capacity food bin.
#[derive(Parser, Debug)]
#[command(name = "food_storage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional JSON config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Storage mode; prompts at startup when not given here or in the config.
    #[arg(short, long, value_enum)]
    pub mode: Option<StorageMode>,

    /// Maximum number of items the bin can hold.
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,
}
