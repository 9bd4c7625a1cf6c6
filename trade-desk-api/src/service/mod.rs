pub mod current_user;
pub mod customer_lookup;
pub mod field_catalog;

// Re-exports
pub use current_user::*;
pub use customer_lookup::*;
pub use field_catalog::*;
