//! Command-line argument definitions for the Solorder binaries.
//!
//! [`Args`] drives `solorder`, [`CheckArgs`] drives `solorder-check`. Both
//! are parsed with [`clap`].

use clap::Parser;

/// Command-line arguments for the Solidity member reorderer
#[derive(Parser, Debug)]
#[command(name = "solorder", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input Solidity file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Command-line arguments for the exercise/solution checker
#[derive(Parser, Debug)]
#[command(name = "solorder-check", author, version, about, long_about = None)]
pub struct CheckArgs {
    /// Directory holding the numbered exercise projects
    #[arg(help = "Project root (defaults to the configured root, `foundry`)")]
    pub root: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
