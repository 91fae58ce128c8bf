//! `repolink resume` command: the normal-start activation pass.

use crate::context::ServiceContext;
use crate::error::LinkError;
use crate::pending::PendingSlot;

use super::handle;

/// Execute the `resume` command.
///
/// If a link was parked before the handler was ready, dispatch it once; the
/// slot is cleared by the same pass. With nothing pending this is a no-op.
///
/// # Errors
///
/// Returns a [`LinkError`] if the slot cannot be read or the pending link
/// cannot be processed.
pub fn run(ctx: &ServiceContext) -> Result<(), LinkError> {
    let slot = PendingSlot::new(ctx);
    match slot.take()? {
        Some(link) => handle::process_link(ctx, &link),
        None => {
            println!("No pending link.");
            Ok(())
        }
    }
}
