use std::sync::Arc;
use trade_desk_db::models::queue::QueueItemModel;

use super::{QueueItemRepositoryImpl, StatusUpdateRepositoryImpl};

/// Factory for creating queue module repositories
///
/// Holds the status broadcast log so that every queue store built from the
/// same factory publishes to, and is observed through, one shared log.
pub struct QueueRepoFactory {
    status_update_repository: Arc<StatusUpdateRepositoryImpl>,
}

impl QueueRepoFactory {
    /// Create a new QueueRepoFactory with an empty broadcast log
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            status_update_repository: Arc::new(StatusUpdateRepositoryImpl::new()),
        })
    }

    /// The broadcast log shared by all stores built here
    pub fn build_status_update_repo(&self) -> Arc<StatusUpdateRepositoryImpl> {
        self.status_update_repository.clone()
    }

    /// Build an empty queue store
    pub fn build_queue_item_repo(&self) -> Arc<QueueItemRepositoryImpl> {
        Arc::new(QueueItemRepositoryImpl::new(
            self.status_update_repository.clone(),
        ))
    }

    /// Build a queue store seeded with existing `items`
    pub fn build_seeded_queue_item_repo(&self, items: Vec<QueueItemModel>) -> Arc<QueueItemRepositoryImpl> {
        Arc::new(QueueItemRepositoryImpl::with_items(
            self.status_update_repository.clone(),
            items,
        ))
    }

    /// Build all queue repositories around a seeded queue store
    pub fn build_seeded_repos(&self, items: Vec<QueueItemModel>) -> QueueRepositories {
        QueueRepositories {
            queue_item_repository: self.build_seeded_queue_item_repo(items),
            status_update_repository: self.build_status_update_repo(),
        }
    }

    /// Build all queue repositories
    pub fn build_all_repos(&self) -> QueueRepositories {
        QueueRepositories {
            queue_item_repository: self.build_queue_item_repo(),
            status_update_repository: self.build_status_update_repo(),
        }
    }
}

/// Container for queue module repositories
pub struct QueueRepositories {
    pub queue_item_repository: Arc<QueueItemRepositoryImpl>,
    pub status_update_repository: Arc<StatusUpdateRepositoryImpl>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransitionPolicy;
    use crate::repository::queue::queue_item_repository::test_utils::create_test_new_queue_item;
    use crate::service::CheckerQueue;
    use chrono::{Duration, Utc};
    use trade_desk_db::models::queue::{QueueItemPatch, QueueStatus};
    use trade_desk_db::models::transaction::TransactionStatus;
    use uuid::Uuid;

    #[test]
    fn test_seeded_queue_lists_newest_first_and_counts_pending() {
        let base = Utc::now();
        let seeded = |entity_id: &str, minutes: i64, status: QueueStatus| {
            let mut item = create_test_new_queue_item(entity_id).into_model(Uuid::new_v4(), base + Duration::minutes(minutes));
            item.status = status;
            item
        };
        let oldest = seeded("tx-1", 0, QueueStatus::Pending);
        let newest = seeded("tx-3", 20, QueueStatus::Pending);
        let middle = seeded("tx-2", 10, QueueStatus::Approved);

        let factory = QueueRepoFactory::new();
        let repos = factory.build_seeded_repos(vec![oldest.clone(), newest.clone(), middle.clone()]);
        let queue = CheckerQueue::new(
            repos.queue_item_repository,
            repos.status_update_repository,
            TransitionPolicy::Permissive,
        );

        let ids: Vec<Uuid> = queue.list_items().into_iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
        assert_eq!(queue.pending_count(), 2);

        let fresh = queue.submit(create_test_new_queue_item("tx-4"));
        assert_eq!(queue.list_items()[0].id, fresh.id);
        assert_eq!(queue.pending_count(), 3);

        queue.act(oldest.id, QueueItemPatch::status(QueueStatus::SentBack));
        assert_eq!(queue.status_for("tx-1"), Some(TransactionStatus::UnderReview));
        assert_eq!(queue.pending_count(), 2);
    }
}
