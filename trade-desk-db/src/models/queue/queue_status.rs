use serde::{Deserialize, Serialize};
use std::str::FromStr;
use trade_desk_api::CheckerAction;

/// Disposition of a checker-queue item.
///
/// `SentBack` re-opens the item for the maker but is not `Pending`: it no longer
/// counts towards the pending badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Pending,
    Approved,
    Rejected,
    SentBack,
}

impl QueueStatus {
    pub const ALL: [QueueStatus; 4] = [
        QueueStatus::Pending,
        QueueStatus::Approved,
        QueueStatus::Rejected,
        QueueStatus::SentBack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueueStatus::Pending => "pending",
            QueueStatus::Approved => "approved",
            QueueStatus::Rejected => "rejected",
            QueueStatus::SentBack => "sent_back",
        }
    }

    /// Approved and rejected items are resolved.
    pub fn is_terminal(&self) -> bool {
        matches!(self, QueueStatus::Approved | QueueStatus::Rejected)
    }
}

impl std::fmt::Display for QueueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(QueueStatus::Pending),
            "approved" => Ok(QueueStatus::Approved),
            "rejected" => Ok(QueueStatus::Rejected),
            "sent_back" => Ok(QueueStatus::SentBack),
            _ => Err(()),
        }
    }
}

impl From<CheckerAction> for QueueStatus {
    fn from(action: CheckerAction) -> Self {
        match action {
            CheckerAction::Approve => QueueStatus::Approved,
            CheckerAction::Reject => QueueStatus::Rejected,
            CheckerAction::SendBack => QueueStatus::SentBack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(QueueStatus::Approved.is_terminal());
        assert!(QueueStatus::Rejected.is_terminal());
        assert!(!QueueStatus::SentBack.is_terminal());
        assert!(!QueueStatus::Pending.is_terminal());
    }

    #[test]
    fn test_sent_back_wire_name() {
        assert_eq!(QueueStatus::SentBack.to_string(), "sent_back");
        assert_eq!("sent_back".parse::<QueueStatus>(), Ok(QueueStatus::SentBack));
        assert!("SENT_BACK".parse::<QueueStatus>().is_err());
    }

    #[test]
    fn test_action_targets() {
        assert_eq!(QueueStatus::from(CheckerAction::Approve), QueueStatus::Approved);
        assert_eq!(QueueStatus::from(CheckerAction::Reject), QueueStatus::Rejected);
        assert_eq!(QueueStatus::from(CheckerAction::SendBack), QueueStatus::SentBack);
    }
}
