use parking_lot::RwLock;
use std::collections::HashMap;
use trade_desk_api::{Customer, CustomerLookup};

/// Customer directory held in memory, keyed by customer id.
#[derive(Default)]
pub struct InMemoryCustomerDirectory {
    customers: RwLock<HashMap<String, Customer>>,
}

impl InMemoryCustomerDirectory {
    pub fn new(customers: impl IntoIterator<Item = Customer>) -> Self {
        Self {
            customers: RwLock::new(
                customers
                    .into_iter()
                    .map(|customer| (customer.id.clone(), customer))
                    .collect(),
            ),
        }
    }

    /// Adds or replaces a customer.
    pub fn upsert(&self, customer: Customer) {
        self.customers.write().insert(customer.id.clone(), customer);
    }

    /// All customers ordered by name, as listed in the customer picker.
    pub fn list(&self) -> Vec<Customer> {
        let mut customers: Vec<Customer> = self.customers.read().values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        customers
    }
}

impl CustomerLookup for InMemoryCustomerDirectory {
    fn find_customer(&self, customer_id: &str) -> Option<Customer> {
        self.customers.read().get(customer_id).cloned()
    }
}
