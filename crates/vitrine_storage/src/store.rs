//! Session store trait definition.

use crate::Slot;
use vitrine_error::VitrineResult;

/// Trait for pluggable session persistence backends.
///
/// Implementations hold one serialized JSON document per [`Slot`]. The
/// session reads each slot once at startup and overwrites it after every
/// mutation; there is no partial update.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a slot's document.
    ///
    /// Returns `None` when the slot has never been written (or was cleared).
    async fn read(&self, slot: Slot) -> VitrineResult<Option<String>>;

    /// Overwrite a slot's document.
    async fn write(&self, slot: Slot, document: &str) -> VitrineResult<()>;

    /// Remove a slot's document entirely.
    ///
    /// Clearing an absent slot is a no-op.
    async fn clear(&self, slot: Slot) -> VitrineResult<()>;
}
