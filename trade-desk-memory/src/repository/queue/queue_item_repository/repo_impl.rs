use parking_lot::RwLock;
use std::sync::Arc;
use trade_desk_db::models::queue::QueueItemModel;

use crate::repository::queue::status_update_repository::StatusUpdateRepositoryImpl;

/// In-memory queue store; the only owner of queue item lifetime.
///
/// Items are kept newest-first. Status changes made through `update` are
/// published to the status broadcast log the store was built with.
pub struct QueueItemRepositoryImpl {
    pub(crate) items: RwLock<Vec<QueueItemModel>>,
    pub(crate) status_log: Arc<StatusUpdateRepositoryImpl>,
}

impl QueueItemRepositoryImpl {
    pub fn new(status_log: Arc<StatusUpdateRepositoryImpl>) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            status_log,
        }
    }

    /// Store pre-populated with `items`, reordered newest submission first.
    pub fn with_items(status_log: Arc<StatusUpdateRepositoryImpl>, mut items: Vec<QueueItemModel>) -> Self {
        items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Self {
            items: RwLock::new(items),
            status_log,
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}
