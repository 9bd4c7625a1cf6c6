pub mod repo_impl;
pub mod test_utils;
pub mod create;
pub mod update;
pub mod delete;
pub mod find_by_id;
pub mod load_all;
pub mod count_by_status;

pub use repo_impl::QueueItemRepositoryImpl;
