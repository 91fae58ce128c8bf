//! Runtime configuration resolved from the environment.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the state directory.
pub const STATE_DIR_VAR: &str = "REPOLINK_STATE";
/// Environment variable naming the editor executable.
pub const EDITOR_VAR: &str = "REPOLINK_EDITOR";

const DEFAULT_STATE_DIR: &str = ".repolink";
const DEFAULT_EDITOR: &str = "code";

/// Resolved runtime configuration.
///
/// Precedence for each value: environment variable, then built-in default.
/// A `.env` file is loaded by the binary before this is read.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the transient state file.
    pub state_dir: PathBuf,
    /// Executable used to drive the host editor.
    pub editor: String,
}

impl Config {
    /// Resolves configuration from the current environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            state_dir: env::var(STATE_DIR_VAR)
                .map_or_else(|_| PathBuf::from(DEFAULT_STATE_DIR), PathBuf::from),
            editor: env::var(EDITOR_VAR).unwrap_or_else(|_| DEFAULT_EDITOR.to_string()),
        }
    }
}
