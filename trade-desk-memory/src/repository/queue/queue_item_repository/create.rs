use chrono::Utc;
use trade_desk_db::models::queue::{NewQueueItem, QueueItemModel};
use trade_desk_db::repository::create::Create;
use tracing::info;
use uuid::Uuid;

use super::repo_impl::QueueItemRepositoryImpl;

impl Create<NewQueueItem, QueueItemModel> for QueueItemRepositoryImpl {
    fn create(&self, item: NewQueueItem) -> QueueItemModel {
        let model = item.into_model(Uuid::new_v4(), Utc::now());

        self.items.write().insert(0, model.clone());

        info!(
            queue_item_id = %model.id,
            entity_id = %model.entity_id,
            entity_type = %model.entity_type,
            maker_id = %model.maker_id,
            "queued item for checker review"
        );
        model
    }
}
