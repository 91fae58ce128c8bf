//! Transient key-value store port for the pending-activation slot.

use super::PortError;

/// A small key-value store scoped to the running process plus restarts.
///
/// Only the pending-activation slot is kept here; the store has no
/// durability guarantees beyond surviving a process restart.
pub trait StateStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, PortError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), PortError>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn clear(&self, key: &str) -> Result<(), PortError>;
}
