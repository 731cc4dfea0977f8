//! Session phases.
//!
//! A session moves through at most three phases: the qualifying decision
//! tree, the weighted preference questions, and the terminal Done phase in
//! which recommendations become available.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The current phase of a questionnaire session.
///
/// Phases flow strictly forward:
/// - `Tree` → `Preferences` (leaf answer, preference questions exist)
/// - `Tree` → `Done` (leaf answer, empty preference list)
/// - `Preferences` → `Done` (last preference question answered)
///
/// `Done` is terminal; only restarting the session leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Walking the decision tree of qualifying questions.
    Tree,

    /// Answering weighted preference questions.
    Preferences,

    /// Finished; recommendations are available.
    Done,
}

impl Phase {
    /// Returns a short label for the phase, suitable for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tree => "Qualifying",
            Self::Preferences => "Preferences",
            Self::Done => "Done",
        }
    }

}

impl StateMachine for Phase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Phase::*;
        matches!(
            (self, target),
            (Tree, Preferences) | (Tree, Done) | (Preferences, Done)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Phase::*;
        match self {
            Tree => vec![Preferences, Done],
            Preferences => vec![Done],
            Done => vec![],
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Tree
    }
}
