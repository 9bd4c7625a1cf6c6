use trade_desk_db::models::identifiable::EntityLinked;
use trade_desk_db::models::queue::{map_queue_status, QueueItemModel, QueueItemPatch, QueueStatus};
use trade_desk_db::repository::status_broadcast::StatusBroadcast;
use trade_desk_db::repository::update::Update;
use std::convert::Infallible;
use tracing::{debug, info};
use uuid::Uuid;

use super::repo_impl::QueueItemRepositoryImpl;

impl QueueItemRepositoryImpl {
    /// Merges `patch` only if `guard` accepts the item as it stands.
    ///
    /// The guard runs under the same write lock as the merge, so no other
    /// update can slip in between the check and the change. A refusal leaves
    /// the item and the broadcast log untouched.
    ///
    /// # Returns
    /// * `Ok(Some(item))` - The item after the merge
    /// * `Ok(None)` - If no item has this id
    /// * `Err(e)` - The guard's refusal
    pub fn update_guarded<E>(
        &self,
        id: Uuid,
        patch: QueueItemPatch,
        guard: impl FnOnce(&QueueItemModel) -> Result<(), E>,
    ) -> Result<Option<QueueItemModel>, E> {
        let new_status = patch.status;

        // Status is recorded under the item lock; log order follows update order.
        let mut items = self.items.write();
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            debug!(queue_item_id = %id, "update ignored, no such queue item");
            return Ok(None);
        };

        guard(item)?;
        item.apply(patch);
        let updated = item.clone();

        if let Some(status) = new_status.filter(|status| *status != QueueStatus::Pending) {
            self.status_log
                .record(updated.get_entity_id(), map_queue_status(status));
        }

        info!(
            queue_item_id = %updated.id,
            entity_id = %updated.entity_id,
            status = %updated.status,
            "updated queue item"
        );
        Ok(Some(updated))
    }
}

impl Update<QueueItemPatch, QueueItemModel> for QueueItemRepositoryImpl {
    fn update(&self, id: Uuid, patch: QueueItemPatch) -> Option<QueueItemModel> {
        match self.update_guarded(id, patch, |_| Ok::<(), Infallible>(())) {
            Ok(updated) => updated,
            Err(never) => match never {},
        }
    }
}
