//! Session module - the questionnaire session aggregate.
//!
//! One session is one user's walk through the questionnaire: tree phase,
//! preference phase, done. Sessions are in-memory only and are replaced
//! wholesale on restart.

mod errors;

#[allow(clippy::module_inception)]
mod session;

pub use errors::SessionError;
pub use session::{AnswerRecord, CurrentQuestion, Cursor, Session};
