//! Decision tree of qualifying questions.
//!
//! The tree is stored as an arena of nodes addressed by [`NodeId`]; answers
//! reference child nodes by id rather than by ownership, so the session
//! cursor can point into the tree without borrowing it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Identifier for a question node, bound to its arena position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates a NodeId from an arena index.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// One selectable answer to a tree question.
///
/// The variant encodes what the answer leads to, so "exactly one of
/// next/frameworks" holds by construction rather than by runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeAnswer {
    /// Continues to another question node.
    Branch { label: String, next: NodeId },

    /// Terminates the tree phase with a qualifying set of framework names.
    Leaf {
        label: String,
        frameworks: Vec<String>,
    },
}

impl TreeAnswer {
    /// Returns the display label of the answer.
    pub fn label(&self) -> &str {
        match self {
            Self::Branch { label, .. } => label,
            Self::Leaf { label, .. } => label,
        }
    }

    /// Returns true if choosing this answer ends the tree phase.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// A single question in the decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionNode {
    prompt: String,
    answers: Vec<TreeAnswer>,
}

impl QuestionNode {
    /// Creates a question node.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the prompt is empty or there are no answers
    pub fn new(prompt: impl Into<String>, answers: Vec<TreeAnswer>) -> Result<Self, ValidationError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        if answers.is_empty() {
            return Err(ValidationError::empty_field("answers"));
        }
        Ok(Self { prompt, answers })
    }

    /// Returns the question text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the ordered answers.
    pub fn answers(&self) -> &[TreeAnswer] {
        &self.answers
    }
}

/// The decision tree arena.
///
/// # Invariants
///
/// - non-empty, rooted at [`DecisionTree::root`]
/// - every `Branch` answer points at a node with a strictly greater arena
///   index than its own node, which rules out cycles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    nodes: Vec<QuestionNode>,
    root: NodeId,
}

impl DecisionTree {
    /// Creates a tree from an arena of nodes rooted at index 0.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the arena is empty
    /// - `InvalidFormat` if a branch points outside the arena or backwards
    ///   (which would permit a cycle)
    pub fn new(nodes: Vec<QuestionNode>) -> Result<Self, ValidationError> {
        if nodes.is_empty() {
            return Err(ValidationError::empty_field("nodes"));
        }

        for (index, node) in nodes.iter().enumerate() {
            for answer in node.answers() {
                if let TreeAnswer::Branch { next, .. } = answer {
                    if next.index() >= nodes.len() {
                        return Err(ValidationError::invalid_format(
                            "next",
                            format!("{} points outside the tree", next),
                        ));
                    }
                    if next.index() <= index {
                        return Err(ValidationError::invalid_format(
                            "next",
                            format!("{} points backwards from node#{}", next, index),
                        ));
                    }
                }
            }
        }

        Ok(Self {
            nodes,
            root: NodeId::from_index(0),
        })
    }

    /// Returns the root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node for an id.
    pub fn get(&self, id: NodeId) -> Option<&QuestionNode> {
        self.nodes.get(id.index())
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes. Always false for a constructed
    /// tree; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
