use trade_desk_db::models::queue::QueueItemModel;
use trade_desk_db::repository::load_all::LoadAll;

use super::repo_impl::QueueItemRepositoryImpl;

impl LoadAll<QueueItemModel> for QueueItemRepositoryImpl {
    fn load_all(&self) -> Vec<QueueItemModel> {
        self.items.read().clone()
    }
}
