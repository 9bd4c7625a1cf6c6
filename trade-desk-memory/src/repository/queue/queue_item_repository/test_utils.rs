use std::collections::BTreeMap;
use trade_desk_api::{Priority, ProductCode};
use trade_desk_db::models::queue::NewQueueItem;

pub fn create_test_new_queue_item(entity_id: &str) -> NewQueueItem {
    NewQueueItem {
        entity_id: entity_id.to_string(),
        entity_type: ProductCode::FormM,
        reference_number: format!("TRD-00000000-{}", entity_id.to_uppercase()),
        amount: "1000".to_string(),
        currency: "USD".to_string(),
        customer_name: "Dangote Industries Ltd".to_string(),
        description: "Raw sugar import".to_string(),
        priority: Priority::Normal,
        maker_id: "user-001".to_string(),
        maker_name: "Current User".to_string(),
        maker_department: Some("Trade Finance".to_string()),
        maker_comments: None,
        metadata: BTreeMap::from([("invoiceAmount".to_string(), "1000".to_string())]),
    }
}
