//! Validated questionnaire bundle.

use crate::domain::catalog::Catalog;
use crate::domain::foundation::ValidationError;

use super::{DecisionTree, NodeId, PreferenceQuestion, TreeAnswer};

/// The three static inputs of a questionnaire, cross-validated.
///
/// Construction is the single place malformed data is rejected; everything
/// downstream (sessions, scoring) assumes a well-formed questionnaire.
///
/// # Invariants
///
/// - every leaf answer's framework names resolve in the catalog
/// - every preference answer's weight vector length equals the catalog length
#[derive(Debug, Clone)]
pub struct Questionnaire {
    tree: DecisionTree,
    preferences: Vec<PreferenceQuestion>,
    catalog: Catalog,
}

impl Questionnaire {
    /// Assembles and cross-validates a questionnaire.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if a leaf names an unknown framework
    /// - `OutOfRange` if a preference weight vector has the wrong length
    pub fn new(
        tree: DecisionTree,
        preferences: Vec<PreferenceQuestion>,
        catalog: Catalog,
    ) -> Result<Self, ValidationError> {
        for index in 0..tree.len() {
            let node = tree
                .get(NodeId::from_index(index))
                .ok_or_else(|| ValidationError::invalid_format("tree", "missing node"))?;
            for answer in node.answers() {
                if let TreeAnswer::Leaf { frameworks, .. } = answer {
                    for name in frameworks {
                        if !catalog.contains(name) {
                            return Err(ValidationError::invalid_format(
                                "frameworks",
                                format!("leaf references unknown framework '{name}'"),
                            ));
                        }
                    }
                }
            }
        }

        for question in &preferences {
            for answer in question.answers() {
                if answer.weights().len() != catalog.len() {
                    return Err(ValidationError::out_of_range(
                        "weights",
                        catalog.len() as i64,
                        catalog.len() as i64,
                        answer.weights().len() as i64,
                    ));
                }
            }
        }

        Ok(Self {
            tree,
            preferences,
            catalog,
        })
    }

    /// Returns the decision tree.
    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    /// Returns the preference questions in presentation order.
    pub fn preferences(&self) -> &[PreferenceQuestion] {
        &self.preferences
    }

    /// Returns the framework catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
