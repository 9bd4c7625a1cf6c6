use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use super::user::QueuePermission;

/// What a checker does with a queue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckerAction {
    Approve,
    Reject,
    SendBack,
}

impl CheckerAction {
    /// Reject and send-back must explain themselves to the maker.
    pub fn requires_comments(&self) -> bool {
        !matches!(self, CheckerAction::Approve)
    }

    pub fn required_permission(&self) -> QueuePermission {
        match self {
            CheckerAction::Approve => QueuePermission::Approve,
            CheckerAction::Reject => QueuePermission::Reject,
            CheckerAction::SendBack => QueuePermission::SendBack,
        }
    }
}

/// A checker's disposition of one queue item, as entered in the review dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_comments_required"))]
pub struct CheckerDecision {
    pub action: CheckerAction,
    #[validate(length(max = 2000, message = "Comments must not exceed 2000 characters"))]
    pub comments: String,
}

impl CheckerDecision {
    pub fn approve(comments: impl Into<String>) -> Self {
        Self {
            action: CheckerAction::Approve,
            comments: comments.into(),
        }
    }

    pub fn reject(comments: impl Into<String>) -> Self {
        Self {
            action: CheckerAction::Reject,
            comments: comments.into(),
        }
    }

    pub fn send_back(comments: impl Into<String>) -> Self {
        Self {
            action: CheckerAction::SendBack,
            comments: comments.into(),
        }
    }
}

fn validate_comments_required(decision: &CheckerDecision) -> Result<(), ValidationError> {
    if decision.action.requires_comments() && decision.comments.trim().is_empty() {
        return Err(ValidationError::new("comments_required").with_message(Cow::Borrowed(
            "Comments are required when rejecting or sending back",
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_without_comments_is_valid() {
        assert!(CheckerDecision::approve("").validate().is_ok());
    }

    #[test]
    fn test_reject_requires_comments() {
        assert!(CheckerDecision::reject("   ").validate().is_err());
        assert!(CheckerDecision::reject("missing docs").validate().is_ok());
    }

    #[test]
    fn test_send_back_requires_comments() {
        assert!(CheckerDecision::send_back("").validate().is_err());
        assert!(CheckerDecision::send_back("attach invoice").validate().is_ok());
    }

    #[test]
    fn test_overlong_comments_rejected() {
        let decision = CheckerDecision::approve("x".repeat(2001));
        assert!(decision.validate().is_err());
    }

    #[test]
    fn test_validation_error_converts_to_api_error() {
        let err: crate::ApiError = CheckerDecision::reject("").validate().unwrap_err().into();
        match err {
            crate::ApiError::ValidationError(message) => {
                assert_eq!(message, "Comments are required when rejecting or sending back");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_field_errors_keep_field_name() {
        let err: crate::ApiError = CheckerDecision::approve("x".repeat(2001)).validate().unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "Validation error: comments: Comments must not exceed 2000 characters"
        );
    }
}
