//! Error types for link handling and repository reconciliation.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::ports::PortError;

/// A single field-level validation problem: which parameter failed and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProblem {
    /// Name of the offending query parameter.
    pub field: String,
    /// Human-readable reason the value was rejected.
    pub reason: String,
}

impl FieldProblem {
    /// Creates a problem for the named field.
    #[must_use]
    pub fn new(field: &str, reason: &str) -> Self {
        Self { field: field.to_string(), reason: reason.to_string() }
    }
}

impl fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Domain errors for the deep-link handler.
///
/// Every failure surfaces as exactly one user-visible notification; no
/// variant triggers cleanup of already-completed phases.
#[derive(Error, Debug)]
pub enum LinkError {
    /// One or more link parameters were missing or malformed. All field
    /// problems are aggregated before any side effect runs.
    #[error("Invalid link parameters: {}", format_problems(.0))]
    Validation(Vec<FieldProblem>),

    /// The target directory exists but is not a recognized repository.
    #[error("Directory {0} exists but is not a git repository")]
    NotARepository(PathBuf),

    /// The target directory holds a different repository than the link names.
    #[error("Repository mismatch: link names {requested}, directory has remote {found}")]
    RemoteMismatch {
        /// Normalized URL requested by the link.
        requested: String,
        /// Normalized URL configured in the existing clone.
        found: String,
    },

    /// An external version-control command failed.
    #[error("{phase} failed: {source}")]
    ExternalCommand {
        /// Which reconciliation phase was running.
        phase: &'static str,
        /// Underlying command error.
        #[source]
        source: PortError,
    },

    /// The requested file does not exist in the repository.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// The host editor could not be driven.
    #[error("Failed to open in editor: {source}")]
    Editor {
        /// Underlying editor error.
        #[source]
        source: PortError,
    },

    /// The pending-activation state store could not be read or written.
    #[error("Pending-link state error: {source}")]
    State {
        /// Underlying store error.
        #[source]
        source: PortError,
    },
}

fn format_problems(problems: &[FieldProblem]) -> String {
    problems.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_joins_problems_with_commas() {
        let err = LinkError::Validation(vec![
            FieldProblem::new("repo", "missing required parameter"),
            FieldProblem::new("line", "must contain only digits"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid link parameters: repo: missing required parameter, line: must contain only digits"
        );
    }

    #[test]
    fn remote_mismatch_names_both_urls() {
        let err = LinkError::RemoteMismatch {
            requested: "https://host/a/b".to_string(),
            found: "https://host/c/d".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://host/a/b"));
        assert!(msg.contains("https://host/c/d"));
    }
}
