pub mod catalog;
pub mod customer;
pub mod decision;
pub mod product_code;
pub mod submission;
pub mod user;

// Re-exports
pub use catalog::*;
pub use customer::*;
pub use decision::*;
pub use product_code::*;
pub use submission::*;
pub use user::*;
