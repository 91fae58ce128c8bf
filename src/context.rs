//! Service context bundling all port trait objects.

use crate::adapters::live::editor::LiveEditorHost;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::state::FileStateStore;
use crate::adapters::live::vcs::LiveVersionControl;
use crate::config::Config;
use crate::ports::editor::EditorHost;
use crate::ports::filesystem::FileSystem;
use crate::ports::state::StateStore;
use crate::ports::vcs::VersionControl;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. The reconciler and
/// the pending-link slot only ever talk to these traits, so tests can swap
/// in fake adapters.
pub struct ServiceContext {
    /// Version control for clone, remote lookup, and checkout.
    pub vcs: Box<dyn VersionControl>,
    /// Host editor for opening folders, documents, and notifications.
    pub editor: Box<dyn EditorHost>,
    /// Filesystem for existence checks and directory creation.
    pub fs: Box<dyn FileSystem>,
    /// Transient key-value store for the pending-activation slot.
    pub state: Box<dyn StateStore>,
}

impl ServiceContext {
    /// Creates a live context wired to the `git` CLI, the configured editor
    /// executable, the real filesystem, and a file-backed state store.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        Self {
            vcs: Box::new(LiveVersionControl),
            editor: Box::new(LiveEditorHost::new(&config.editor)),
            fs: Box::new(LiveFileSystem),
            state: Box::new(FileStateStore::new(&config.state_dir)),
        }
    }
}
