//! Pending-activation slot.
//!
//! When the operating environment delivers a link before the handler can run
//! directly, the raw link is parked here and consumed on the next activation
//! pass. The slot holds at most one link; storing again overwrites. It is an
//! explicit object owned by the dispatch path, backed by the [`StateStore`]
//! port so it survives a process restart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::context::ServiceContext;
use crate::error::LinkError;
use crate::ports::state::StateStore;

const PENDING_KEY: &str = "pending_link";

/// The record stored in the slot: the raw link plus when it arrived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingRecord {
    /// The raw link string as delivered.
    pub link: String,
    /// When the link was parked.
    pub received_at: DateTime<Utc>,
}

/// Single-slot queue for one outstanding link.
pub struct PendingSlot<'a> {
    state: &'a dyn StateStore,
}

impl<'a> PendingSlot<'a> {
    /// Creates a slot backed by the context's state store.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { state: ctx.state.as_ref() }
    }

    /// Parks a link in the slot, overwriting any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::State`] if the record cannot be serialized or
    /// the store cannot be written.
    pub fn store(&self, link: &str) -> Result<(), LinkError> {
        let record = PendingRecord { link: link.to_string(), received_at: Utc::now() };
        let json =
            serde_json::to_string(&record).map_err(|e| LinkError::State { source: e.into() })?;
        self.state.set(PENDING_KEY, &json).map_err(|source| LinkError::State { source })
    }

    /// Consumes the pending link, clearing the slot in the same pass.
    ///
    /// Returns `None` when no link is pending.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::State`] if the store cannot be read or cleared,
    /// or if the stored record is not parseable.
    pub fn take(&self) -> Result<Option<String>, LinkError> {
        let Some(json) = self.state.get(PENDING_KEY).map_err(|source| LinkError::State { source })?
        else {
            return Ok(None);
        };
        let record: PendingRecord =
            serde_json::from_str(&json).map_err(|e| LinkError::State { source: e.into() })?;
        self.state.clear(PENDING_KEY).map_err(|source| LinkError::State { source })?;
        tracing::debug!(received_at = %record.received_at, "consumed pending link");
        Ok(Some(record.link))
    }
}
