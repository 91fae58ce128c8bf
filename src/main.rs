//! Binary entrypoint for the `repolink` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Optional .env for REPOLINK_STATE / REPOLINK_EDITOR overrides.
    let _ = dotenvy::dotenv();

    match repolink::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
