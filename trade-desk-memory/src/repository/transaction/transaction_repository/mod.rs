pub mod repo_impl;
pub mod test_utils;
pub mod create;
pub mod find_by_id;
pub mod load_all;
pub mod sync_statuses;
pub mod query;

pub use repo_impl::TransactionRepositoryImpl;

/// A product page's transaction list.
pub type TransactionLedger = TransactionRepositoryImpl;
