pub mod config;
pub mod directory;
pub mod memory_repositories;
pub mod repository;
pub mod service;

pub use config::{TradeDeskConfig, TransitionPolicy};
pub use memory_repositories::MemoryRepositories;
pub use repository::queue::{QueueItemRepositoryImpl, StatusUpdateRepositoryImpl};
pub use repository::transaction::TransactionLedger;
pub use service::{CheckerQueue, SubmissionFlow, SubmissionReceipt};

#[cfg(test)]
pub mod test_helper;
