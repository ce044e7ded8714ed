//! CLI parse: clap types for prodtable. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// prodtable - filterable, sortable product table
#[derive(Parser)]
#[command(name = "prodtable")]
#[command(about = "Browse products joined with their categories and owners")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace directory (where prodtable.toml is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Dataset directory (overrides [dataset] path)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the product table once
    List {
        /// Show only products whose category belongs to this user ("All" for everyone)
        #[arg(long)]
        user: Option<String>,
        /// Show only products in this category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Case-insensitive search in product names
        #[arg(long, short)]
        query: Option<String>,
        /// Sort column (id, product, category, user)
        #[arg(long)]
        sort: Option<String>,
        /// Reverse the order
        #[arg(long)]
        reverse: bool,
        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Show available user and category filters
    Filters {
        /// Output format (text or json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Interactive session driving the table controls
    Browse,
}
