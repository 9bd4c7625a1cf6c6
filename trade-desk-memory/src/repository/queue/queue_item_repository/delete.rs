use trade_desk_db::repository::delete::Delete;
use tracing::{debug, info};
use uuid::Uuid;

use super::repo_impl::QueueItemRepositoryImpl;

impl Delete for QueueItemRepositoryImpl {
    fn delete(&self, id: Uuid) -> bool {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = items.len() != before;

        if removed {
            info!(queue_item_id = %id, "removed queue item");
        } else {
            debug!(queue_item_id = %id, "remove ignored, no such queue item");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::queue::queue_item_repository::test_utils::create_test_new_queue_item;
    use crate::test_helper::setup_test_context;
    use trade_desk_db::repository::create::Create;
    use trade_desk_db::repository::load_all::LoadAll;

    #[test]
    fn test_delete_removes_only_matching_item() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let repo = &ctx.queue_repos().queue_item_repository;

        let keep = repo.create(create_test_new_queue_item("tx-1"));
        let removed = repo.create(create_test_new_queue_item("tx-2"));

        assert!(repo.delete(removed.id));
        assert_eq!(repo.load_all(), vec![keep]);
        Ok(())
    }

    #[test]
    fn test_delete_unknown_id_is_noop() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let repo = &ctx.queue_repos().queue_item_repository;

        repo.create(create_test_new_queue_item("tx-1"));
        let before = repo.load_all();

        assert!(!repo.delete(Uuid::new_v4()));
        assert_eq!(repo.load_all(), before);
        Ok(())
    }
}
