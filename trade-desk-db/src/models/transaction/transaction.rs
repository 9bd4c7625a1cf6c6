use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trade_desk_api::{Priority, ProductCode};
use uuid::Uuid;

use super::transaction_status::TransactionStatus;
use crate::models::identifiable::Identifiable;
use crate::utils::parse_amount;

/// A trade transaction raised by a maker on a product page.
///
/// `amount` is kept as entered; `metadata` holds the product-specific form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionModel {
    pub id: Uuid,
    pub reference_number: String,
    pub product: ProductCode,
    pub customer_id: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub priority: Priority,
    pub status: TransactionStatus,
    pub metadata: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TransactionModel {
    /// Identifier the checker queue uses to refer back to this transaction.
    pub fn entity_id(&self) -> String {
        self.id.to_string()
    }

    /// Numeric amount; unparsable amounts count as zero.
    pub fn amount_value(&self) -> Decimal {
        parse_amount(&self.amount).unwrap_or(Decimal::ZERO)
    }
}

impl Identifiable for TransactionModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

/// Fields the submission flow supplies for a new transaction.
///
/// The ledger assigns the id and timestamps; the status always starts at pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub reference_number: String,
    pub product: ProductCode,
    pub customer_id: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub priority: Priority,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl NewTransaction {
    pub fn into_model(self, id: Uuid, created_at: DateTime<Utc>) -> TransactionModel {
        TransactionModel {
            id,
            reference_number: self.reference_number,
            product: self.product,
            customer_id: self.customer_id,
            amount: self.amount,
            currency: self.currency,
            description: self.description,
            priority: self.priority,
            status: TransactionStatus::Pending,
            metadata: self.metadata,
            created_at,
            updated_at: created_at,
        }
    }
}
