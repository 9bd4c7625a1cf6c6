use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use super::customer::Customer;
use super::product_code::ProductCode;

/// Bank name filled into product forms alongside customer details.
pub const HOUSE_BANK_NAME: &str = "Union Bank of Nigeria";

/// Urgency the maker attaches to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// A filled product form as handed over by the maker.
///
/// `amount`, `currency` and `description` are the generic inputs shared by every
/// product; `fields` holds the product-specific values keyed by catalog field name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct SubmissionForm {
    pub product: Option<ProductCode>,
    pub customer_id: String,
    pub amount: String,
    pub currency: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: String,
    pub priority: Priority,
    /// Note to the checker, shown alongside the queue item.
    #[validate(length(max = 2000, message = "Comments must not exceed 2000 characters"))]
    pub maker_comments: Option<String>,
    pub fields: BTreeMap<String, String>,
}

impl SubmissionForm {
    pub fn new(product: ProductCode, customer_id: impl Into<String>) -> Self {
        Self {
            product: Some(product),
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Value of a product field, ignoring blanks.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Copies customer details into the matching product fields.
    ///
    /// When `overwrite` is false only blank fields are filled, which is how an
    /// existing form is completed without clobbering what the maker typed.
    pub fn autofill_from_customer(&mut self, customer: &Customer, overwrite: bool) {
        let autofill: [(&str, &str); 17] = [
            ("businessName", customer.name.as_str()),
            ("businessAddress", customer.address.as_str()),
            ("companyAddress", customer.address.as_str()),
            ("applicantName", customer.name.as_str()),
            ("applicantAddress", customer.address.as_str()),
            ("exporterName", customer.name.as_str()),
            ("exporterAddress", customer.address.as_str()),
            ("importerName", customer.name.as_str()),
            ("importerAddress", customer.address.as_str()),
            ("rcNumber", customer.rc_number.as_str()),
            ("tin", customer.tin.as_str()),
            ("bankAccountNumber", customer.account_number.as_str()),
            ("accountNumber", customer.account_number.as_str()),
            ("accountName", customer.account_name.as_str()),
            ("email", customer.email.as_str()),
            ("phone", customer.phone.as_str()),
            ("bankName", HOUSE_BANK_NAME),
        ];

        self.customer_id = customer.id.clone();
        for (name, value) in autofill {
            if overwrite || self.field(name).is_none() {
                self.fields.insert(name.to_string(), value.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dangote() -> Customer {
        Customer {
            id: "cust-001".to_string(),
            name: "Dangote Industries Ltd".to_string(),
            address: "1 Alfred Rewane Road, Ikoyi, Lagos".to_string(),
            rc_number: "RC-71242".to_string(),
            tin: "01234567-0001".to_string(),
            account_number: "0012345678".to_string(),
            account_name: "Dangote Industries Ltd".to_string(),
            email: "trade@dangote.com".to_string(),
            phone: "+234 1 448 0815".to_string(),
        }
    }

    #[test]
    fn test_autofill_overwrites_in_create_mode() {
        let mut form = SubmissionForm::new(ProductCode::FormM, "")
            .with_field("importerName", "Typed by maker");
        form.autofill_from_customer(&dangote(), true);

        assert_eq!(form.customer_id, "cust-001");
        assert_eq!(form.field("importerName"), Some("Dangote Industries Ltd"));
        assert_eq!(form.field("bankName"), Some(HOUSE_BANK_NAME));
        assert_eq!(form.field("tin"), Some("01234567-0001"));
    }

    #[test]
    fn test_autofill_keeps_filled_fields_in_edit_mode() {
        let mut form = SubmissionForm::new(ProductCode::FormNxp, "")
            .with_field("exporterName", "Typed by maker")
            .with_field("exporterAddress", "  ");
        form.autofill_from_customer(&dangote(), false);

        assert_eq!(form.field("exporterName"), Some("Typed by maker"));
        assert_eq!(
            form.field("exporterAddress"),
            Some("1 Alfred Rewane Road, Ikoyi, Lagos")
        );
    }

    #[test]
    fn test_blank_field_reads_as_absent() {
        let form = SubmissionForm::new(ProductCode::Bfc, "c").with_field("totalAmount", " ");
        assert_eq!(form.field("totalAmount"), None);
    }

    #[test]
    fn test_priority_defaults_to_normal() {
        assert_eq!(SubmissionForm::default().priority, Priority::Normal);
    }
}
