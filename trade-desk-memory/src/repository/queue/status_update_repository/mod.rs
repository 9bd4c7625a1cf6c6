pub mod repo_impl;
pub mod status_broadcast;

pub use repo_impl::StatusUpdateRepositoryImpl;
