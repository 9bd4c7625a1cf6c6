use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::transaction::TransactionStatus;

/// Latest transaction-level status published for one entity.
///
/// At most one of these exists per `entity_id`; a newer record replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateModel {
    pub entity_id: String,
    pub status: TransactionStatus,
    pub updated_at: DateTime<Utc>,
}
