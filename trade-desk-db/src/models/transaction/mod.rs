pub mod transaction;
pub mod transaction_query;
pub mod transaction_status;

pub use transaction::*;
pub use transaction_query::*;
pub use transaction_status::*;
