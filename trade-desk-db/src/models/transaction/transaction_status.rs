use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a trade transaction as shown on product pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[default]
    Draft,
    Pending,
    UnderReview,
    Approved,
    Rejected,
    Completed,
    Exception,
    Processing,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Draft => "draft",
            TransactionStatus::Pending => "pending",
            TransactionStatus::UnderReview => "under_review",
            TransactionStatus::Approved => "approved",
            TransactionStatus::Rejected => "rejected",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Exception => "exception",
            TransactionStatus::Processing => "processing",
        }
    }

    /// Statuses listed on the "Active" tab.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Pending | TransactionStatus::UnderReview | TransactionStatus::Approved
        )
    }

    /// Statuses listed on the "Completed" tab.
    pub fn is_completed(&self) -> bool {
        matches!(self, TransactionStatus::Completed | TransactionStatus::Rejected)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(TransactionStatus::Draft),
            "pending" => Ok(TransactionStatus::Pending),
            "under_review" => Ok(TransactionStatus::UnderReview),
            "approved" => Ok(TransactionStatus::Approved),
            "rejected" => Ok(TransactionStatus::Rejected),
            "completed" => Ok(TransactionStatus::Completed),
            "exception" => Ok(TransactionStatus::Exception),
            "processing" => Ok(TransactionStatus::Processing),
            _ => Err(()),
        }
    }
}
