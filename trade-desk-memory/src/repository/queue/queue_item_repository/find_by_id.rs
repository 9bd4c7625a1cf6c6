use trade_desk_db::models::queue::QueueItemModel;
use trade_desk_db::repository::find_by_id::FindById;
use uuid::Uuid;

use super::repo_impl::QueueItemRepositoryImpl;

impl FindById<QueueItemModel> for QueueItemRepositoryImpl {
    fn find_by_id(&self, id: Uuid) -> Option<QueueItemModel> {
        self.items.read().iter().find(|item| item.id == id).cloned()
    }
}
