//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `repolink`.
#[derive(Debug, Parser)]
#[command(name = "repolink", version, about = "Handle repository deep links")]
pub struct Cli {
    /// Show debug logging.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Handle an incoming deep link.
    Handle {
        /// The link, e.g. `repolink://open?repo=<url>&dir=<path>`.
        uri: String,
    },
    /// Dispatch a link that was parked before the handler was ready.
    Resume,
}
