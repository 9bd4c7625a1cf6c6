use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trade_desk_api::{Priority, ProductCode};
use uuid::Uuid;

use super::queue_status::QueueStatus;
use crate::models::identifiable::{EntityLinked, Identifiable};

/// Checker-facing record tracking one submission through approval.
///
/// - Amount, currency, customer name, description and priority are a snapshot of
///   the transaction at submission time; they are not kept in sync afterwards.
/// - Maker identity and `submitted_at` are fixed at creation.
/// - Checker fields are empty until a checker acts; a later action overwrites them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItemModel {
    pub id: Uuid,
    pub entity_id: String,
    pub entity_type: ProductCode,
    pub reference_number: String,
    pub status: QueueStatus,
    pub amount: String,
    pub currency: String,
    pub customer_name: String,
    pub description: String,
    pub priority: Priority,
    pub maker_id: String,
    pub maker_name: String,
    pub maker_department: Option<String>,
    pub maker_comments: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub checker_id: Option<String>,
    pub checker_name: Option<String>,
    pub checker_comments: Option<String>,
    pub checked_at: Option<DateTime<Utc>>,
    pub metadata: BTreeMap<String, String>,
}

impl QueueItemModel {
    /// Merges the fields present in `patch` onto this item.
    pub fn apply(&mut self, patch: QueueItemPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(customer_name) = patch.customer_name {
            self.customer_name = customer_name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(checker_id) = patch.checker_id {
            self.checker_id = Some(checker_id);
        }
        if let Some(checker_name) = patch.checker_name {
            self.checker_name = Some(checker_name);
        }
        if let Some(checker_comments) = patch.checker_comments {
            self.checker_comments = Some(checker_comments);
        }
        if let Some(checked_at) = patch.checked_at {
            self.checked_at = Some(checked_at);
        }
        if let Some(metadata) = patch.metadata {
            self.metadata = metadata;
        }
    }
}

impl Identifiable for QueueItemModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl EntityLinked for QueueItemModel {
    fn get_entity_id(&self) -> &str {
        &self.entity_id
    }
}

/// Fields a maker supplies when putting a transaction on the queue.
///
/// Id, submission time and status are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQueueItem {
    pub entity_id: String,
    pub entity_type: ProductCode,
    pub reference_number: String,
    pub amount: String,
    pub currency: String,
    pub customer_name: String,
    pub description: String,
    pub priority: Priority,
    pub maker_id: String,
    pub maker_name: String,
    pub maker_department: Option<String>,
    pub maker_comments: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl NewQueueItem {
    /// Builds the stored item: always pending, checker fields empty.
    pub fn into_model(self, id: Uuid, submitted_at: DateTime<Utc>) -> QueueItemModel {
        QueueItemModel {
            id,
            entity_id: self.entity_id,
            entity_type: self.entity_type,
            reference_number: self.reference_number,
            status: QueueStatus::Pending,
            amount: self.amount,
            currency: self.currency,
            customer_name: self.customer_name,
            description: self.description,
            priority: self.priority,
            maker_id: self.maker_id,
            maker_name: self.maker_name,
            maker_department: self.maker_department,
            maker_comments: self.maker_comments,
            submitted_at,
            checker_id: None,
            checker_name: None,
            checker_comments: None,
            checked_at: None,
            metadata: self.metadata,
        }
    }
}

/// Partial update of a queue item; `None` leaves the field untouched.
///
/// Linkage (`entity_id`, `entity_type`) and maker fields are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueItemPatch {
    pub status: Option<QueueStatus>,
    pub amount: Option<String>,
    pub currency: Option<String>,
    pub customer_name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub checker_id: Option<String>,
    pub checker_name: Option<String>,
    pub checker_comments: Option<String>,
    pub checked_at: Option<DateTime<Utc>>,
    pub metadata: Option<BTreeMap<String, String>>,
}

impl QueueItemPatch {
    pub fn status(status: QueueStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Patch recording a checker's disposition with their identity and comments.
    pub fn checker_action(
        status: QueueStatus,
        checker_id: impl Into<String>,
        checker_name: impl Into<String>,
        checker_comments: impl Into<String>,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            status: Some(status),
            checker_id: Some(checker_id.into()),
            checker_name: Some(checker_name.into()),
            checker_comments: Some(checker_comments.into()),
            checked_at: Some(checked_at),
            ..Default::default()
        }
    }
}
