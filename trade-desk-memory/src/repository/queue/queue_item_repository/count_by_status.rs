use trade_desk_db::models::queue::QueueStatus;
use trade_desk_db::repository::count_by_status::CountByStatus;

use super::repo_impl::QueueItemRepositoryImpl;

impl CountByStatus<QueueStatus> for QueueItemRepositoryImpl {
    fn count_by_status(&self, status: QueueStatus) -> usize {
        self.items
            .read()
            .iter()
            .filter(|item| item.status == status)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::queue::queue_item_repository::test_utils::create_test_new_queue_item;
    use crate::test_helper::setup_test_context;
    use trade_desk_db::models::queue::QueueItemPatch;
    use trade_desk_db::repository::create::Create;
    use trade_desk_db::repository::update::Update;

    #[test]
    fn test_count_by_status() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let repo = &ctx.queue_repos().queue_item_repository;

        let a = repo.create(create_test_new_queue_item("tx-1"));
        let b = repo.create(create_test_new_queue_item("tx-2"));
        repo.create(create_test_new_queue_item("tx-3"));

        repo.update(a.id, QueueItemPatch::status(QueueStatus::Approved));
        repo.update(b.id, QueueItemPatch::status(QueueStatus::SentBack));

        assert_eq!(repo.count_by_status(QueueStatus::Pending), 1);
        assert_eq!(repo.count_by_status(QueueStatus::Approved), 1);
        assert_eq!(repo.count_by_status(QueueStatus::SentBack), 1);
        assert_eq!(repo.count_by_status(QueueStatus::Rejected), 0);
        Ok(())
    }
}
