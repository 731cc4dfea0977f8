//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised by session transitions and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// The chosen answer index is outside the current question's answers.
    ///
    /// Invalid-argument failure: the presentation layer is expected to have
    /// validated that a selection exists before submitting.
    #[error("Answer index {index} is out of range; question has {available} answers")]
    AnswerOutOfRange { index: usize, available: usize },

    /// An answer was submitted to a finished session.
    #[error("Session is finished; restart to answer more questions")]
    SessionFinished,

    /// Recommendations were requested before the session finished.
    #[error("Session is not finished; recommendations are not available yet")]
    NotFinished,

    /// A phase transition violated the session state machine.
    #[error("Invalid phase transition: {0}")]
    InvalidTransition(String),

    /// The session and questionnaire disagree, which a validated
    /// questionnaire rules out.
    #[error("Inconsistent session state: {0}")]
    Inconsistent(String),
}

impl SessionError {
    pub fn answer_out_of_range(index: usize, available: usize) -> Self {
        SessionError::AnswerOutOfRange { index, available }
    }

    pub fn inconsistent(message: impl Into<String>) -> Self {
        SessionError::Inconsistent(message.into())
    }

    /// Maps the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::AnswerOutOfRange { .. } => ErrorCode::AnswerOutOfRange,
            SessionError::SessionFinished => ErrorCode::SessionFinished,
            SessionError::NotFinished => ErrorCode::SessionNotFinished,
            SessionError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            SessionError::Inconsistent(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::InvalidTransition(err.to_string())
    }
}
