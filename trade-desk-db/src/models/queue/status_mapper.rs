use super::queue_status::QueueStatus;
use crate::models::transaction::TransactionStatus;

/// Translates a checker-queue disposition into the status shown on the
/// originating transaction.
pub fn map_queue_status(queue_status: QueueStatus) -> TransactionStatus {
    match queue_status {
        QueueStatus::Approved => TransactionStatus::Approved,
        QueueStatus::Rejected => TransactionStatus::Rejected,
        QueueStatus::SentBack => TransactionStatus::UnderReview,
        QueueStatus::Pending => TransactionStatus::Pending,
    }
}

/// Same mapping for an untyped status string; anything unrecognised is pending.
pub fn map_raw_queue_status(queue_status: &str) -> TransactionStatus {
    queue_status
        .parse::<QueueStatus>()
        .map(map_queue_status)
        .unwrap_or(TransactionStatus::Pending)
}
