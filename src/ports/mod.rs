//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! The advisor core has a single external dependency: something has to
//! supply the questionnaire data (decision tree, preference questions,
//! framework catalog).

mod questionnaire_source;

pub use questionnaire_source::{LoadError, QuestionnaireSource};
