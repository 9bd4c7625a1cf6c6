use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Reference number collision: {0}")]
    ReferenceCollision(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let detail = match &error.message {
                    Some(message) => message.to_string(),
                    None => error.code.to_string(),
                };
                // Schema-level errors are not tied to a field.
                if field == "__all__" {
                    messages.push(detail);
                } else {
                    messages.push(format!("{field}: {detail}"));
                }
            }
        }
        if messages.is_empty() {
            messages.push(errors.to_string());
        }
        messages.sort();
        ApiError::ValidationError(messages.join("; "))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
