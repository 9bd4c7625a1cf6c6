use crate::models::queue::StatusUpdateModel;
use crate::models::transaction::TransactionStatus;

/// Latest-status-per-entity record that transaction lists read to pick up
/// checker decisions.
///
/// Despite being written to on every decision it never accumulates: recording a
/// status for an entity replaces whatever was recorded for it before.
pub trait StatusBroadcast: Send + Sync {
    /// Replace the status recorded for `entity_id`
    ///
    /// # Returns
    /// * The record now held for the entity
    fn record(&self, entity_id: &str, status: TransactionStatus) -> StatusUpdateModel;

    /// Status most recently recorded for `entity_id`
    ///
    /// # Returns
    /// * `Some(status)` - The mapped transaction status
    /// * `None` - If no decision has been recorded for the entity
    fn lookup(&self, entity_id: &str) -> Option<TransactionStatus>;
}
