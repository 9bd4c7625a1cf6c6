use std::sync::Arc;
use trade_desk_db::models::queue::QueueItemModel;
use trade_desk_api::{ApiResult, CurrentUserProvider, CustomerLookup};
use trade_desk_db::repository::pagination::PageRequest;
use tracing::debug;

use crate::config::TradeDeskConfig;
use crate::repository::queue::{QueueRepoFactory, QueueRepositories};
use crate::repository::transaction::{TransactionRepoFactory, TransactionRepositories};
use crate::service::{CheckerQueue, SubmissionFlow};

/// Entry point wiring the in-memory stores of one back-office session.
///
/// All queue stores built from the same instance share one status broadcast
/// log. Dropping the instance (and everything built from it) discards all state.
pub struct MemoryRepositories {
    config: TradeDeskConfig,
    queue_factory: Arc<QueueRepoFactory>,
    transaction_factory: Arc<TransactionRepoFactory>,
}

impl MemoryRepositories {
    pub fn new(config: TradeDeskConfig, customers: Arc<dyn CustomerLookup>) -> ApiResult<Self> {
        config.validate()?;
        debug!(
            reference_prefix = %config.reference_prefix,
            transition_policy = ?config.transition_policy,
            "initialising in-memory repositories"
        );
        Ok(Self {
            config,
            queue_factory: QueueRepoFactory::new(),
            transaction_factory: TransactionRepoFactory::new(customers),
        })
    }

    pub fn config(&self) -> &TradeDeskConfig {
        &self.config
    }

    /// Create all repositories for the session
    pub fn create_all_repositories(&self) -> (QueueRepositories, TransactionRepositories) {
        (
            self.queue_factory.build_all_repos(),
            self.transaction_factory.build_all_repos(),
        )
    }

    /// Create all repositories with the queue seeded from existing items
    pub fn create_seeded_repositories(
        &self,
        queue_items: Vec<QueueItemModel>,
    ) -> (QueueRepositories, TransactionRepositories) {
        (
            self.queue_factory.build_seeded_repos(queue_items),
            self.transaction_factory.build_all_repos(),
        )
    }

    /// Page `page` of a listing at the configured page size
    pub fn page_request(&self, page: usize) -> PageRequest {
        self.config.page_request(page)
    }

    pub fn checker_queue(&self, repos: &QueueRepositories) -> Arc<CheckerQueue> {
        Arc::new(CheckerQueue::new(
            repos.queue_item_repository.clone(),
            repos.status_update_repository.clone(),
            self.config.transition_policy,
        ))
    }

    pub fn submission_flow(
        &self,
        queue: Arc<CheckerQueue>,
        customers: Arc<dyn CustomerLookup>,
        users: Arc<dyn CurrentUserProvider>,
    ) -> SubmissionFlow {
        SubmissionFlow::new(queue, customers, users, self.config.clone())
    }
}
