//! Link parsing and parameter validation.
//!
//! An incoming link carries its payload in the query string:
//!
//! ```text
//! repolink://open?repo=<url>&dir=<path>[&branch=<name>][&file=<path>][&line=<n>]
//! ```
//!
//! Validation is an explicit function returning either typed parameters or
//! the full list of field problems; there is no schema engine, and no field
//! failure short-circuits the others.

use std::collections::HashMap;

use url::Url;

use crate::error::{FieldProblem, LinkError};

/// Validated parameters extracted from a link's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParameters {
    /// Repository URL to clone or verify against.
    pub repo: Url,
    /// Local directory the repository should live in.
    pub dir: String,
    /// Branch to check out after the repository is ready.
    pub branch: Option<String>,
    /// File to open, relative to `dir`.
    pub file: Option<String>,
    /// 1-based line to position the view at. Only meaningful with `file`.
    pub line: Option<u32>,
}

/// Parses a raw link string and validates its query parameters.
///
/// # Errors
///
/// Returns [`LinkError::Validation`] with every field problem found, either
/// because the link itself is not a valid URI or because required query
/// parameters are missing or malformed.
pub fn parse_link(link: &str) -> Result<LinkParameters, LinkError> {
    let uri = Url::parse(link).map_err(|e| {
        LinkError::Validation(vec![FieldProblem::new("uri", &format!("not a valid link: {e}"))])
    })?;
    validate(&query_map(&uri))
}

/// Collects a URI's query pairs into a map. Percent-decoding is handled by
/// the URL parser; for a repeated key the last value wins.
#[must_use]
pub fn query_map(uri: &Url) -> HashMap<String, String> {
    uri.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}

/// Validates raw query parameters into [`LinkParameters`].
///
/// All field-level problems are collected and reported together rather than
/// failing on the first one.
///
/// # Errors
///
/// Returns [`LinkError::Validation`] listing every offending field.
pub fn validate(params: &HashMap<String, String>) -> Result<LinkParameters, LinkError> {
    let mut problems = Vec::new();

    let repo = match params.get("repo") {
        None => {
            problems.push(FieldProblem::new("repo", "missing required parameter"));
            None
        }
        Some(raw) => match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(e) => {
                problems.push(FieldProblem::new("repo", &format!("must be a valid URL: {e}")));
                None
            }
        },
    };

    let dir = match params.get("dir") {
        None => {
            problems.push(FieldProblem::new("dir", "missing required parameter"));
            None
        }
        Some(raw) if raw.is_empty() => {
            problems.push(FieldProblem::new("dir", "must not be empty"));
            None
        }
        Some(raw) => Some(raw.clone()),
    };

    let line = match params.get("line") {
        None => None,
        Some(raw) => match parse_line(raw) {
            Ok(n) => Some(n),
            Err(reason) => {
                problems.push(FieldProblem::new("line", &reason));
                None
            }
        },
    };

    match (repo, dir) {
        (Some(repo), Some(dir)) if problems.is_empty() => Ok(LinkParameters {
            repo,
            dir,
            branch: params.get("branch").cloned(),
            file: params.get("file").cloned(),
            line,
        }),
        _ => Err(LinkError::Validation(problems)),
    }
}

/// Parses a line number from a digits-only string. Any other format is a
/// validation failure, never a silent default.
fn parse_line(raw: &str) -> Result<u32, String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err("must contain only digits".to_string());
    }
    raw.parse::<u32>().map_err(|_| "is out of range".to_string())
}
