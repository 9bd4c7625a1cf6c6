use chrono::Utc;
use std::sync::Arc;
use trade_desk_api::{ApiError, ApiResult, CheckerDecision, CurrentUser, QueuePermission};
use trade_desk_db::models::queue::{
    NewQueueItem, QueueItemModel, QueueItemPatch, QueueStatus, RequestQuery, RequestStats,
};
use trade_desk_db::models::transaction::TransactionStatus;
use trade_desk_db::repository::pagination::{Page, PageRequest};
use trade_desk_db::repository::{CountByStatus, Create, Delete, FindById, LoadAll, StatusBroadcast, Update};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::TransitionPolicy;
use crate::repository::queue::{QueueItemRepositoryImpl, StatusUpdateRepositoryImpl};

/// Maker-checker queue as seen by every page of the back office.
///
/// Wraps the queue store and the status broadcast log it publishes to. Build
/// one per session (or per test) and hand it to whatever needs it.
pub struct CheckerQueue {
    items: Arc<QueueItemRepositoryImpl>,
    status_log: Arc<StatusUpdateRepositoryImpl>,
    policy: TransitionPolicy,
}

impl CheckerQueue {
    pub fn new(
        items: Arc<QueueItemRepositoryImpl>,
        status_log: Arc<StatusUpdateRepositoryImpl>,
        policy: TransitionPolicy,
    ) -> Self {
        Self {
            items,
            status_log,
            policy,
        }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Every queue item, newest submission first.
    pub fn list_items(&self) -> Vec<QueueItemModel> {
        self.items.load_all()
    }

    pub fn find(&self, id: Uuid) -> Option<QueueItemModel> {
        self.items.find_by_id(id)
    }

    /// Puts a new item on the queue as pending.
    pub fn submit(&self, item: NewQueueItem) -> QueueItemModel {
        self.items.create(item)
    }

    /// Applies `patch` to the item unconditionally; unknown ids are ignored.
    pub fn act(&self, id: Uuid, patch: QueueItemPatch) -> Option<QueueItemModel> {
        self.items.update(id, patch)
    }

    /// Removes an item outside the approval flow; unknown ids are ignored.
    pub fn withdraw(&self, id: Uuid) -> bool {
        self.items.delete(id)
    }

    pub fn pending_count(&self) -> usize {
        self.items.count_by_status(QueueStatus::Pending)
    }

    /// Transaction status last published for `entity_id`.
    pub fn status_for(&self, entity_id: &str) -> Option<TransactionStatus> {
        self.status_log.lookup(entity_id)
    }

    /// Records a checker's decision on a queue item.
    ///
    /// # Errors
    /// * `ValidationError` - reject or send-back without comments
    /// * `Forbidden` - the checker's role lacks the matching queue permission
    /// * `InvalidTransition` - strict policy and the item is already approved or rejected
    ///
    /// # Returns
    /// * `Ok(Some(item))` - the item after the decision
    /// * `Ok(None)` - no item has this id
    pub fn decide(
        &self,
        id: Uuid,
        decision: CheckerDecision,
        checker: &CurrentUser,
    ) -> ApiResult<Option<QueueItemModel>> {
        decision.validate()?;

        let permission = decision.action.required_permission();
        if !checker.role.has_queue_permission(permission) {
            warn!(
                queue_item_id = %id,
                checker_id = %checker.id,
                role = %checker.role,
                "checker decision refused"
            );
            return Err(ApiError::Forbidden(format!(
                "{} may not {} queue items",
                checker.role,
                permission_verb(permission)
            )));
        }

        let target = QueueStatus::from(decision.action);
        let patch = QueueItemPatch::checker_action(
            target,
            checker.id.clone(),
            checker.display_name(),
            decision.comments.trim(),
            Utc::now(),
        );
        let updated = match self.policy {
            TransitionPolicy::Permissive => self.act(id, patch),
            TransitionPolicy::Strict => self.items.update_guarded(id, patch, |current| {
                if current.status.is_terminal() {
                    return Err(ApiError::InvalidTransition(format!(
                        "queue item {id} is already {}, cannot move to {target}",
                        current.status
                    )));
                }
                Ok(())
            })?,
        };

        if let Some(item) = &updated {
            info!(
                queue_item_id = %item.id,
                entity_id = %item.entity_id,
                status = %item.status,
                checker_id = %checker.id,
                "checker decision recorded"
            );
        }
        Ok(updated)
    }

    /// Submissions made by `maker_id`, filtered and paged for My Requests.
    pub fn requests_for(&self, maker_id: &str, query: &RequestQuery, page: PageRequest) -> Page<QueueItemModel> {
        let rows = self
            .items
            .load_all()
            .into_iter()
            .filter(|item| item.maker_id == maker_id && query.matches(item))
            .collect();
        Page::paginate(rows, page)
    }

    pub fn request_stats(&self, maker_id: &str) -> RequestStats {
        let items = self.items.load_all();
        RequestStats::tally(items.iter().filter(|item| item.maker_id == maker_id))
    }
}

fn permission_verb(permission: QueuePermission) -> &'static str {
    match permission {
        QueuePermission::View => "view",
        QueuePermission::Approve => "approve",
        QueuePermission::Reject => "reject",
        QueuePermission::SendBack => "send back",
    }
}
