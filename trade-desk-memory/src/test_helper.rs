//! Test helper module for per-test store isolation
//!
//! Every call to [`setup_test_context`] builds fresh stores, so tests never
//! observe each other's queue items, transactions or status updates.

use std::sync::{Arc, Once};
use trade_desk_api::{Customer, CurrentUser, Role};
use tracing_subscriber::EnvFilter;

use crate::config::TradeDeskConfig;
use crate::directory::{InMemoryCustomerDirectory, UserSession};
use crate::memory_repositories::MemoryRepositories;
use crate::repository::queue::QueueRepositories;
use crate::repository::transaction::TransactionRepositories;
use crate::service::{CheckerQueue, SubmissionFlow};

static TRACING: Once = Once::new();

/// Test context holding one isolated back-office session
///
/// The maker is signed in; `checker` holds the Checker role.
pub struct TestContext {
    pub repos: MemoryRepositories,
    pub queue_repos: QueueRepositories,
    pub transaction_repos: TransactionRepositories,
    pub queue: Arc<CheckerQueue>,
    pub flow: SubmissionFlow,
    pub customers: Arc<InMemoryCustomerDirectory>,
    pub session: Arc<UserSession>,
    pub maker: CurrentUser,
    pub checker: CurrentUser,
}

impl TestContext {
    /// Get the queue repositories from the context
    pub fn queue_repos(&self) -> &QueueRepositories {
        &self.queue_repos
    }

    /// Get the transaction repositories from the context
    pub fn transaction_repos(&self) -> &TransactionRepositories {
        &self.transaction_repos
    }
}

/// Setup a test context with fresh in-memory stores and default config
///
/// # Example
///
/// ```rust,ignore
/// #[test]
/// fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context()?;
///     let queue_item_repo = &ctx.queue_repos().queue_item_repository;
///
///     // Perform test operations...
///     // All state is dropped with ctx
///
///     Ok(())
/// }
/// ```
pub fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    setup_test_context_with(TradeDeskConfig::default())
}

pub fn setup_test_context_with(
    config: TradeDeskConfig,
) -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    init_tracing();

    let customers = Arc::new(InMemoryCustomerDirectory::new([
        test_customer("CUST-001", "Dangote Industries Ltd"),
        test_customer("CUST-002", "Olam Nigeria Ltd"),
    ]));
    let maker = test_user("user-100", Role::Maker);
    let checker = test_user("chk-200", Role::Checker);
    let session = Arc::new(UserSession::signed_in(maker.clone()));

    let repos = MemoryRepositories::new(config, customers.clone())?;
    let (queue_repos, transaction_repos) = repos.create_all_repositories();
    let queue = repos.checker_queue(&queue_repos);
    let flow = repos.submission_flow(queue.clone(), customers.clone(), session.clone());

    Ok(TestContext {
        repos,
        queue_repos,
        transaction_repos,
        queue,
        flow,
        customers,
        session,
        maker,
        checker,
    })
}

pub fn test_customer(id: &str, name: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        address: "Plot 1 Marina, Lagos".to_string(),
        rc_number: "RC-100200".to_string(),
        tin: "12345678-0001".to_string(),
        account_number: "0123456789".to_string(),
        account_name: name.to_string(),
        email: "trade@example.com".to_string(),
        phone: "+234 800 000 0000".to_string(),
    }
}

pub fn test_user(id: &str, role: Role) -> CurrentUser {
    CurrentUser {
        id: id.to_string(),
        first_name: "Test".to_string(),
        last_name: role.to_string(),
        role,
        department: Some("Trade Operations".to_string()),
    }
}

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::queue::queue_item_repository::test_utils::create_test_new_queue_item;
    use crate::TransitionPolicy;
    use chrono::Utc;
    use trade_desk_db::models::queue::RequestQuery;
    use trade_desk_db::models::transaction::TransactionQuery;
    use trade_desk_db::repository::pagination::PageRequest;
    use trade_desk_api::{ProductCode, SubmissionForm};
    use uuid::Uuid;

    #[test]
    fn test_contexts_are_isolated() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let first = setup_test_context()?;
        first.queue.submit(create_test_new_queue_item("tx-1"));
        assert_eq!(first.queue.pending_count(), 1);

        let second = setup_test_context()?;
        assert_eq!(second.queue.pending_count(), 0);
        assert!(second.queue_repos().status_update_repository.is_empty());
        Ok(())
    }

    #[test]
    fn test_context_shares_stores_with_queue() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with(TradeDeskConfig {
            transition_policy: TransitionPolicy::Strict,
            ..Default::default()
        })?;
        assert_eq!(ctx.repos.config().transition_policy, TransitionPolicy::Strict);
        assert_eq!(ctx.queue.policy(), TransitionPolicy::Strict);

        ctx.queue.submit(create_test_new_queue_item("tx-1"));
        assert_eq!(ctx.queue_repos().queue_item_repository.len(), 1);
        Ok(())
    }

    #[test]
    fn test_listings_use_configured_page_size() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with(TradeDeskConfig {
            page_size: 2,
            ..Default::default()
        })?;
        assert_eq!(ctx.repos.page_request(1), PageRequest::new(2, 1));

        for n in 0..3 {
            ctx.queue.submit(create_test_new_queue_item(&format!("tx-{n}")));
        }
        let first = ctx.queue.requests_for("user-001", &RequestQuery::default(), ctx.repos.page_request(1));
        let second = ctx.queue.requests_for("user-001", &RequestQuery::default(), ctx.repos.page_request(2));
        assert_eq!((first.items.len(), first.total, first.total_pages()), (2, 3, 2));
        assert_eq!(second.items.len(), 1);

        let ledger = &ctx.transaction_repos().transaction_repository;
        for _ in 0..3 {
            ctx.flow.submit(ledger, SubmissionForm::new(ProductCode::Bfc, "CUST-001"))?;
        }
        let page = ledger.query(&TransactionQuery::default(), ctx.repos.page_request(2));
        assert_eq!(page.items.len(), 1);
        assert!(page.is_last_page());
        Ok(())
    }

    #[test]
    fn test_seeded_repositories_feed_the_queue() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context()?;
        let seed = create_test_new_queue_item("tx-seed").into_model(Uuid::new_v4(), Utc::now());

        let (queue_repos, _transaction_repos) = ctx.repos.create_seeded_repositories(vec![seed.clone()]);
        let queue = ctx.repos.checker_queue(&queue_repos);

        assert_eq!(queue.list_items(), vec![seed]);
        assert_eq!(queue.pending_count(), 1);
        Ok(())
    }
}
