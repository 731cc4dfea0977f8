//! Questionnaire module - static question data and session phases.
//!
//! # Module Organization
//!
//! - `phase` - the Tree / Preferences / Done phase state machine
//! - `tree` - the decision tree of qualifying questions
//! - `preference` - weighted preference questions
//! - `questionnaire` - validated bundle of tree, preferences, and catalog

mod phase;
mod preference;
mod tree;

#[allow(clippy::module_inception)]
mod questionnaire;

pub use phase::Phase;
pub use preference::{PreferenceAnswer, PreferenceQuestion};
pub use questionnaire::Questionnaire;
pub use tree::{DecisionTree, NodeId, QuestionNode, TreeAnswer};
