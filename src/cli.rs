//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "zcalc", version, about = "Calculator with scientific functions and history")]
pub struct Cli {
    /// Path to config.toml (defaults to the user config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep history in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive calculator (the default).
    Repl,
    /// Run key presses such as `12 + 3 =` and print the display.
    Eval {
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Show, clear or export the calculation history.
    History {
        /// Remove every entry.
        #[arg(long, conflicts_with = "export")]
        clear: bool,
        /// Write the history as text, to FILE or a date-stamped file.
        #[arg(long, value_name = "FILE")]
        export: Option<Option<PathBuf>>,
    },
}
