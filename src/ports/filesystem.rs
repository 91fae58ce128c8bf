//! Filesystem port for the few path operations the reconciler needs.

use std::path::Path;

use super::PortError;

/// Provides filesystem existence checks and directory creation.
///
/// Abstracting the filesystem allows testing the reconciler without
/// touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Creates a directory and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), PortError>;
}
