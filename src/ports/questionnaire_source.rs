//! Port for loading questionnaire data.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::questionnaire::Questionnaire;

/// Errors that can occur while loading questionnaire data.
///
/// All of these are fatal configuration errors: the core assumes a
/// well-formed questionnaire and never re-validates at runtime.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read questionnaire data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse questionnaire data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Questionnaire data failed validation: {0}")]
    Validation(#[from] ValidationError),

    #[error("Tree answer '{label}' must have exactly one of next/frameworks")]
    AmbiguousAnswer { label: String },
}

/// Port supplying the three static questionnaire inputs, already validated.
pub trait QuestionnaireSource {
    /// Loads and validates a questionnaire.
    fn load(&self) -> Result<Questionnaire, LoadError>;
}
