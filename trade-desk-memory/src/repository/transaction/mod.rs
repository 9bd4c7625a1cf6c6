pub mod factory;
pub mod transaction_repository;

pub use factory::{TransactionRepoFactory, TransactionRepositories};
pub use transaction_repository::{TransactionLedger, TransactionRepositoryImpl};
