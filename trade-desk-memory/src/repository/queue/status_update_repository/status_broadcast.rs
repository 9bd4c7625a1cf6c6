use chrono::Utc;
use trade_desk_db::models::queue::StatusUpdateModel;
use trade_desk_db::models::transaction::TransactionStatus;
use trade_desk_db::repository::status_broadcast::StatusBroadcast;
use tracing::debug;

use super::repo_impl::StatusUpdateRepositoryImpl;

impl StatusBroadcast for StatusUpdateRepositoryImpl {
    fn record(&self, entity_id: &str, status: TransactionStatus) -> StatusUpdateModel {
        let update = StatusUpdateModel {
            entity_id: entity_id.to_string(),
            status,
            updated_at: Utc::now(),
        };

        let mut updates = self.updates.write();
        let before = updates.len();
        updates.retain(|existing| existing.entity_id != entity_id);
        let replaced = before != updates.len();
        updates.push(update.clone());

        debug!(entity_id, status = %status, replaced, "recorded transaction status");
        update
    }

    fn lookup(&self, entity_id: &str) -> Option<TransactionStatus> {
        self.updates
            .read()
            .iter()
            .find(|update| update.entity_id == entity_id)
            .map(|update| update.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_without_record_is_none() {
        let log = StatusUpdateRepositoryImpl::new();
        assert_eq!(log.lookup("tx-1"), None);
    }

    #[test]
    fn test_record_replaces_previous_entry() {
        let log = StatusUpdateRepositoryImpl::new();
        log.record("tx-1", TransactionStatus::UnderReview);
        log.record("tx-2", TransactionStatus::Approved);
        log.record("tx-1", TransactionStatus::Rejected);

        assert_eq!(log.len(), 2);
        assert_eq!(log.lookup("tx-1"), Some(TransactionStatus::Rejected));
        assert_eq!(log.lookup("tx-2"), Some(TransactionStatus::Approved));

        let order: Vec<String> = log.all_updates().into_iter().map(|u| u.entity_id).collect();
        assert_eq!(order, vec!["tx-2".to_string(), "tx-1".to_string()]);
    }

    #[test]
    fn test_rapid_repeated_records_keep_only_last() {
        let log = StatusUpdateRepositoryImpl::new();
        let sequence = [
            TransactionStatus::UnderReview,
            TransactionStatus::Approved,
            TransactionStatus::UnderReview,
            TransactionStatus::Rejected,
        ];
        for status in sequence {
            log.record("tx-9", status);
        }

        assert_eq!(log.len(), 1);
        assert_eq!(log.lookup("tx-9"), Some(TransactionStatus::Rejected));
    }
}
