//! `repolink handle` command: the link receiver.

use crate::context::ServiceContext;
use crate::error::LinkError;
use crate::link;
use crate::pending::PendingSlot;
use crate::reconcile;

/// Execute the `handle` command for an incoming link.
///
/// The link is parked in the pending slot before anything else runs, so a
/// restart between delivery and handling can recover it; the slot is then
/// consumed immediately on the same pass.
///
/// # Errors
///
/// Returns a [`LinkError`] if the slot cannot be written or the link cannot
/// be processed.
pub fn run(ctx: &ServiceContext, uri: &str) -> Result<(), LinkError> {
    let slot = PendingSlot::new(ctx);
    slot.store(uri)?;
    let link = slot.take()?.unwrap_or_else(|| uri.to_string());
    process_link(ctx, &link)
}

/// Validates a raw link and reconciles the repository it names.
///
/// # Errors
///
/// Returns a [`LinkError`] from validation or any reconciliation phase.
pub fn process_link(ctx: &ServiceContext, raw: &str) -> Result<(), LinkError> {
    tracing::info!(link = raw, "handling deep link");
    let params = link::parse_link(raw)?;
    reconcile::reconcile(ctx, &params)
}
