//! Live adapters for real external interactions.

pub mod editor;
pub mod filesystem;
pub mod state;
pub mod vcs;
