use chrono::Utc;
use tracing::{debug, info};

use super::repo_impl::TransactionRepositoryImpl;
use crate::service::checker_queue::CheckerQueue;

impl TransactionRepositoryImpl {
    /// Pulls the latest checker decision for every transaction in the ledger.
    ///
    /// Transactions the queue has no decision for keep their status.
    ///
    /// # Returns
    /// * Number of transactions whose status changed
    pub fn sync_statuses(&self, queue: &CheckerQueue) -> usize {
        let now = Utc::now();
        let mut changed = 0;

        for tx in self.transactions.write().iter_mut() {
            let Some(status) = queue.status_for(&tx.entity_id()) else {
                continue;
            };
            if status != tx.status {
                debug!(
                    reference_number = %tx.reference_number,
                    from = %tx.status,
                    to = %status,
                    "transaction status changed by checker"
                );
                tx.status = status;
                tx.updated_at = now;
                changed += 1;
            }
        }

        if changed > 0 {
            info!(changed, "synchronised transaction statuses");
        }
        changed
    }
}
