use crate::actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    /// Stable name of the error kind, as reported to resolver callers.
    pub fn kind(&self) -> &'static str {
        match self {
            UserError::NotFound(_) => "NotFound",
            UserError::ActorCommunicationError(_) => "ActorCommunicationError",
        }
    }
}

impl From<FrameworkError> for UserError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}
