//! Repository reconciliation.
//!
//! Drives one link from validated parameters to an open editor: make sure
//! the repository is on disk and is the right one, optionally switch
//! branches, open the folder, optionally open a file at a line. Phases run
//! strictly in sequence and completed phases are never rolled back when a
//! later one fails.

use std::path::Path;

use crate::context::ServiceContext;
use crate::error::LinkError;
use crate::link::LinkParameters;
use crate::normalize::normalize_remote_url;
use crate::ports::editor::Selection;

/// Reconciles the local directory with the link's parameters and opens the
/// result in the host editor.
///
/// # Errors
///
/// Returns a [`LinkError`] describing the failing phase. Phases that already
/// completed (for example a successful clone) are left in place.
pub fn reconcile(ctx: &ServiceContext, params: &LinkParameters) -> Result<(), LinkError> {
    let target = Path::new(&params.dir);

    if ctx.fs.exists(target) {
        verify_existing(ctx, params, target)?;
        ctx.editor.notify_info(&format!("Repository verified: {}", params.repo));
    } else {
        clone_fresh(ctx, params, target)?;
        ctx.editor.notify_info(&format!("Repository cloned: {}", params.repo));
    }

    if let Some(branch) = &params.branch {
        checkout_branch(ctx, target, branch)?;
        ctx.editor.notify_info(&format!("Branch checked out: {branch}"));
    }

    tracing::info!(dir = %target.display(), "opening folder");
    ctx.editor.open_folder(target).map_err(|source| LinkError::Editor { source })?;

    if let Some(file) = &params.file {
        open_file(ctx, target, file, params.line)?;
    }

    Ok(())
}

/// Verifies that an existing directory holds the repository the link names.
///
/// A just-cloned repository is trusted; this comparison only runs for
/// directories that were already present.
fn verify_existing(
    ctx: &ServiceContext,
    params: &LinkParameters,
    target: &Path,
) -> Result<(), LinkError> {
    if !ctx.fs.exists(&target.join(".git")) {
        return Err(LinkError::NotARepository(target.to_path_buf()));
    }

    let found = ctx
        .vcs
        .remote_url(target)
        .map_err(|source| LinkError::ExternalCommand { phase: "reading remote URL", source })?;

    let requested = normalize_remote_url(params.repo.as_str());
    let existing = normalize_remote_url(&found);
    tracing::debug!(%requested, %existing, "comparing remote identity");

    if requested != existing {
        return Err(LinkError::RemoteMismatch {
            requested: params.repo.to_string(),
            found,
        });
    }
    Ok(())
}

fn clone_fresh(
    ctx: &ServiceContext,
    params: &LinkParameters,
    target: &Path,
) -> Result<(), LinkError> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() && !ctx.fs.exists(parent) {
            ctx.fs.create_dir_all(parent).map_err(|source| LinkError::ExternalCommand {
                phase: "creating parent directories",
                source,
            })?;
        }
    }

    tracing::info!(repo = %params.repo, dir = %target.display(), "cloning repository");
    ctx.vcs
        .clone_repo(params.repo.as_str(), target)
        .map_err(|source| LinkError::ExternalCommand { phase: "cloning repository", source })
}

/// Checks out `branch`, creating it when it does not exist locally. The
/// create-and-checkout fallback is attempted exactly once; its failure is
/// terminal.
fn checkout_branch(ctx: &ServiceContext, target: &Path, branch: &str) -> Result<(), LinkError> {
    if let Err(first) = ctx.vcs.checkout(target, branch) {
        tracing::debug!(%branch, error = %first, "checkout failed, creating branch");
        ctx.vcs
            .create_and_checkout_branch(target, branch)
            .map_err(|source| LinkError::ExternalCommand { phase: "checking out branch", source })?;
    }
    Ok(())
}

fn open_file(
    ctx: &ServiceContext,
    target: &Path,
    file: &str,
    line: Option<u32>,
) -> Result<(), LinkError> {
    let full_path = target.join(file);
    if !ctx.fs.exists(&full_path) {
        return Err(LinkError::FileNotFound(full_path));
    }

    let document =
        ctx.editor.open_document(&full_path).map_err(|source| LinkError::Editor { source })?;

    // Editor positions are zero-based; the link carries a 1-based line.
    // A line of 0 selects nothing.
    let selection =
        line.and_then(|n| n.checked_sub(1)).map(|start_line| Selection { start_line });

    ctx.editor
        .show_document(&document, selection)
        .map_err(|source| LinkError::Editor { source })
}
