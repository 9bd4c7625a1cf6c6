pub mod customer_directory;
pub mod field_catalog;
pub mod user_session;

pub use customer_directory::InMemoryCustomerDirectory;
pub use field_catalog::{blank_form_fields, display_value, field_label, InMemoryFieldCatalog};
pub use user_session::UserSession;
