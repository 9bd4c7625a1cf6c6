use crate::domain::customer::{Customer, UNKNOWN_CUSTOMER_NAME};

/// Read access to the customer directory.
pub trait CustomerLookup: Send + Sync {
    /// Find a customer by its identifier
    ///
    /// # Returns
    /// * `Some(Customer)` - The customer record
    /// * `None` - If no customer has this id
    fn find_customer(&self, customer_id: &str) -> Option<Customer>;

    /// Display name for snapshots; unknown ids resolve to "Unknown Customer".
    fn customer_name(&self, customer_id: &str) -> String {
        self.find_customer(customer_id)
            .map(|customer| customer.name)
            .unwrap_or_else(|| UNKNOWN_CUSTOMER_NAME.to_string())
    }
}
