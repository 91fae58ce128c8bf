//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the link-handling core and an
//! external system (version control, the host editor, the filesystem, the
//! transient state store). Implementations live in `src/adapters/`.

pub mod editor;
pub mod filesystem;
pub mod state;
pub mod vcs;

pub use editor::{DocumentHandle, EditorHost, Selection};
pub use filesystem::FileSystem;
pub use state::StateStore;
pub use vcs::VersionControl;

/// Error type shared by all port methods.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
