pub mod checker_queue;
pub mod submission;

pub use checker_queue::CheckerQueue;
pub use submission::{SubmissionFlow, SubmissionReceipt};
