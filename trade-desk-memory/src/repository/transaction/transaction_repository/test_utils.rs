use chrono::Utc;
use std::collections::BTreeMap;
use trade_desk_api::{Priority, ProductCode};
use trade_desk_db::models::transaction::{TransactionModel, TransactionStatus};
use uuid::Uuid;

pub fn create_test_transaction(reference_number: &str, status: TransactionStatus) -> TransactionModel {
    let now = Utc::now();
    TransactionModel {
        id: Uuid::new_v4(),
        reference_number: reference_number.to_string(),
        product: ProductCode::FormM,
        customer_id: "CUST-001".to_string(),
        amount: "1000".to_string(),
        currency: "USD".to_string(),
        description: "Raw sugar import".to_string(),
        priority: Priority::Normal,
        status,
        metadata: BTreeMap::new(),
        created_at: now,
        updated_at: now,
    }
}
