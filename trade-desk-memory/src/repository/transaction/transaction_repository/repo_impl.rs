use parking_lot::RwLock;
use std::sync::Arc;
use trade_desk_api::CustomerLookup;
use trade_desk_db::models::transaction::{TransactionModel, TransactionStatus, TransactionSummary};
use tracing::info;

/// In-memory transaction ledger backing one product page.
///
/// Transactions are kept newest-first. Statuses only change through
/// `sync_statuses`, which pulls checker decisions from the queue.
pub struct TransactionRepositoryImpl {
    pub(crate) transactions: RwLock<Vec<TransactionModel>>,
    pub(crate) customers: Arc<dyn CustomerLookup>,
}

impl TransactionRepositoryImpl {
    pub fn new(customers: Arc<dyn CustomerLookup>) -> Self {
        Self {
            transactions: RwLock::new(Vec::new()),
            customers,
        }
    }

    /// Adds a fully built transaction at the top of the list.
    pub fn insert(&self, transaction: TransactionModel) {
        info!(
            transaction_id = %transaction.id,
            reference_number = %transaction.reference_number,
            product = %transaction.product,
            "recorded transaction"
        );
        self.transactions.write().insert(0, transaction);
    }

    pub fn find_by_reference(&self, reference_number: &str) -> Option<TransactionModel> {
        self.transactions
            .read()
            .iter()
            .find(|tx| tx.reference_number == reference_number)
            .cloned()
    }

    pub fn contains_reference(&self, reference_number: &str) -> bool {
        self.transactions
            .read()
            .iter()
            .any(|tx| tx.reference_number == reference_number)
    }

    pub fn len(&self) -> usize {
        self.transactions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.read().is_empty()
    }

    pub fn summary(&self) -> TransactionSummary {
        let transactions = self.transactions.read();
        let count = |status: TransactionStatus| transactions.iter().filter(|tx| tx.status == status).count();
        TransactionSummary {
            total: transactions.len(),
            pending: count(TransactionStatus::Pending),
            under_review: count(TransactionStatus::UnderReview),
            completed: transactions.iter().filter(|tx| tx.status.is_completed()).count(),
        }
    }

    /// Transactions on the "Active" tab, newest first.
    pub fn active(&self) -> Vec<TransactionModel> {
        self.filtered(|tx| tx.status.is_active())
    }

    /// Transactions on the "Completed" tab, newest first.
    pub fn completed(&self) -> Vec<TransactionModel> {
        self.filtered(|tx| tx.status.is_completed())
    }

    fn filtered(&self, keep: impl Fn(&TransactionModel) -> bool) -> Vec<TransactionModel> {
        self.transactions
            .read()
            .iter()
            .filter(|tx| keep(tx))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::transaction::transaction_repository::test_utils::create_test_transaction;
    use crate::test_helper::setup_test_context;

    #[test]
    fn test_reference_lookup() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let ledger = &ctx.transaction_repos().transaction_repository;

        ledger.insert(create_test_transaction("TRD-00000001-AAAA", TransactionStatus::Pending));

        assert!(ledger.contains_reference("TRD-00000001-AAAA"));
        assert!(!ledger.contains_reference("TRD-00000001-BBBB"));
        let found = ledger
            .find_by_reference("TRD-00000001-AAAA")
            .ok_or("transaction not found")?;
        assert_eq!(found.status, TransactionStatus::Pending);
        Ok(())
    }

    #[test]
    fn test_summary_and_tabs() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let ledger = &ctx.transaction_repos().transaction_repository;

        for (reference, status) in [
            ("TRD-1", TransactionStatus::Pending),
            ("TRD-2", TransactionStatus::Pending),
            ("TRD-3", TransactionStatus::UnderReview),
            ("TRD-4", TransactionStatus::Approved),
            ("TRD-5", TransactionStatus::Rejected),
            ("TRD-6", TransactionStatus::Completed),
            ("TRD-7", TransactionStatus::Draft),
        ] {
            ledger.insert(create_test_transaction(reference, status));
        }

        assert_eq!(
            ledger.summary(),
            TransactionSummary {
                total: 7,
                pending: 2,
                under_review: 1,
                completed: 2,
            }
        );

        let active: Vec<String> = ledger.active().into_iter().map(|tx| tx.reference_number).collect();
        assert_eq!(active, vec!["TRD-4", "TRD-3", "TRD-2", "TRD-1"]);
        let completed: Vec<String> = ledger.completed().into_iter().map(|tx| tx.reference_number).collect();
        assert_eq!(completed, vec!["TRD-6", "TRD-5"]);
        Ok(())
    }
}
