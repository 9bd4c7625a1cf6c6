pub mod queue;
pub mod transaction;
