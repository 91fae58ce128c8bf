//! Version-control port for repository operations.

use std::path::Path;

use super::PortError;

/// Provides the version-control operations the reconciler needs.
///
/// Abstracting the `git` CLI behind a trait keeps the reconciliation
/// logic testable without invoking a real executable.
pub trait VersionControl: Send + Sync {
    /// Clones the repository at `url` into `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the clone command fails.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<(), PortError>;

    /// Returns the configured remote URL of the repository at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if no remote is configured or the command fails.
    fn remote_url(&self, dir: &Path) -> Result<String, PortError>;

    /// Checks out an existing branch in the repository at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch does not exist or the command fails.
    fn checkout(&self, dir: &Path, branch: &str) -> Result<(), PortError>;

    /// Creates a new branch in the repository at `dir` and checks it out.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch cannot be created.
    fn create_and_checkout_branch(&self, dir: &Path, branch: &str) -> Result<(), PortError>;
}
