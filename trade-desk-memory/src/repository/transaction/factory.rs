use std::sync::Arc;
use trade_desk_api::CustomerLookup;

use super::TransactionRepositoryImpl;

/// Factory for creating transaction ledgers
///
/// Every product page owns its own ledger; all of them resolve customer
/// names through the directory held here.
pub struct TransactionRepoFactory {
    customers: Arc<dyn CustomerLookup>,
}

impl TransactionRepoFactory {
    pub fn new(customers: Arc<dyn CustomerLookup>) -> Arc<Self> {
        Arc::new(Self { customers })
    }

    /// Build an empty transaction ledger
    pub fn build_transaction_repo(&self) -> Arc<TransactionRepositoryImpl> {
        Arc::new(TransactionRepositoryImpl::new(self.customers.clone()))
    }

    /// Build all transaction repositories
    pub fn build_all_repos(&self) -> TransactionRepositories {
        TransactionRepositories {
            transaction_repository: self.build_transaction_repo(),
        }
    }
}

/// Container for transaction module repositories
pub struct TransactionRepositories {
    pub transaction_repository: Arc<TransactionRepositoryImpl>,
}
