use serde::{Deserialize, Serialize};

/// Display name used in queue snapshots when the customer cannot be resolved.
pub const UNKNOWN_CUSTOMER_NAME: &str = "Unknown Customer";

/// Customer record supplied by the customer directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: String,
    pub rc_number: String,
    pub tin: String,
    pub account_number: String,
    pub account_name: String,
    pub email: String,
    pub phone: String,
}
