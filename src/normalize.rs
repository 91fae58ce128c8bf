//! Remote URL normalization.
//!
//! Two URLs naming the same remote can differ in scheme and suffix: an SSH
//! shorthand like `git@github.com:acme/widgets.git` and
//! `https://github.com/acme/widgets` refer to one repository. Normalization
//! canonicalizes those differences so identity checks compare equal.

/// Normalizes a remote URL for identity comparison.
///
/// Trims whitespace, strips one trailing `.git`, rewrites SSH shorthand
/// `user@host:path` into `https://host/path`, and strips a trailing slash.
#[must_use]
pub fn normalize_remote_url(url: &str) -> String {
    let mut normalized = url.trim().to_string();

    if let Some(stripped) = normalized.strip_suffix(".git") {
        normalized = stripped.to_string();
    }

    if let Some(rewritten) = rewrite_ssh_shorthand(&normalized) {
        normalized = rewritten;
    }

    while normalized.ends_with('/') {
        normalized.pop();
    }

    normalized
}

/// Rewrites `user@host:path` into `https://host/path`. Returns `None` for
/// anything that is not the scp-like shorthand (in particular, URLs that
/// already carry a scheme).
fn rewrite_ssh_shorthand(url: &str) -> Option<String> {
    if url.contains("://") {
        return None;
    }
    let (user, rest) = url.split_once('@')?;
    if user.is_empty() || user.contains('/') {
        return None;
    }
    let (host, path) = rest.split_once(':')?;
    if host.is_empty() || host.contains('/') || path.is_empty() {
        return None;
    }
    Some(format!("https://{host}/{path}"))
}
