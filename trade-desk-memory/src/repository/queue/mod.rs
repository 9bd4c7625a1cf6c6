pub mod factory;
pub mod queue_item_repository;
pub mod status_update_repository;

pub use factory::{QueueRepoFactory, QueueRepositories};
pub use queue_item_repository::QueueItemRepositoryImpl;
pub use status_update_repository::StatusUpdateRepositoryImpl;
