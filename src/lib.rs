//! Core library for the `repolink` deep-link handler.
//!
//! Given a link like `repolink://open?repo=<url>&dir=<path>`, repolink makes
//! sure the repository exists locally (cloning if absent, verifying remote
//! identity if present), optionally checks out a branch, and opens the
//! result in the host editor, optionally at a file and line.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod link;
pub mod normalize;
pub mod pending;
pub mod ports;
pub mod reconcile;

#[cfg(test)]
pub mod testing;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution
/// fails. Command failures have already been reported through the editor
/// host's notification surface.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Help and version output are not failures.
        Err(err)
            if matches!(
                err.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) =>
        {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    init_tracing(cli.verbose);
    commands::dispatch(&cli.command)
}

/// Initializes the tracing subscriber. Warnings always show; debug output
/// only with `--verbose`. Repeated initialization (as in tests) is ignored.
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(format!("repolink={level}"))
        .with_target(false)
        .try_init();
}
