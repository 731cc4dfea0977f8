//! Score vector value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FrameworkId, ValidationError};

/// Running numeric scores for every catalog framework.
///
/// # Invariants
///
/// - length always equals the catalog length it was built against
/// - index `i` scores the framework at catalog position `i`; all indexing
///   goes through [`FrameworkId`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreVector {
    scores: Vec<f64>,
}

impl ScoreVector {
    /// Creates a zero vector of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            scores: vec![0.0; len],
        }
    }

    /// Creates a vector from raw scores, checking the expected length.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `scores.len() != expected_len`
    pub fn from_scores(scores: Vec<f64>, expected_len: usize) -> Result<Self, ValidationError> {
        if scores.len() != expected_len {
            return Err(ValidationError::out_of_range(
                "scores",
                expected_len as i64,
                expected_len as i64,
                scores.len() as i64,
            ));
        }
        Ok(Self { scores })
    }

    /// Creates a vector from already-validated scores.
    ///
    /// Used where the length is guaranteed by an upstream invariant, such as
    /// preference weights validated against the catalog at load time.
    pub fn from_raw(scores: Vec<f64>) -> Self {
        Self { scores }
    }

    /// Returns the vector length (== catalog length).
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Returns the score for a framework.
    pub fn get(&self, id: FrameworkId) -> Option<f64> {
        self.scores.get(id.index()).copied()
    }

    /// Sets the score for a framework. Out-of-range ids are ignored; they
    /// cannot occur for ids minted from the same catalog.
    pub fn set(&mut self, id: FrameworkId, score: f64) {
        if let Some(slot) = self.scores.get_mut(id.index()) {
            *slot = score;
        }
    }

    /// Returns this vector scaled elementwise by a coefficient.
    pub fn scaled(&self, coefficient: f64) -> Self {
        Self {
            scores: self.scores.iter().map(|s| coefficient * s).collect(),
        }
    }

    /// Adds another vector into this one, elementwise.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the lengths differ
    pub fn accumulate(&mut self, other: &ScoreVector) -> Result<(), ValidationError> {
        if self.len() != other.len() {
            return Err(ValidationError::out_of_range(
                "scores",
                self.len() as i64,
                self.len() as i64,
                other.len() as i64,
            ));
        }
        for (slot, addend) in self.scores.iter_mut().zip(&other.scores) {
            *slot += addend;
        }
        Ok(())
    }

    /// Returns the maximum score, or 0.0 for an empty vector.
    pub fn max_score(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Iterates scores in catalog order, paired with their framework ids.
    pub fn iter(&self) -> impl Iterator<Item = (FrameworkId, f64)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .map(|(index, score)| (FrameworkId::from_index(index), *score))
    }

    /// Returns the raw scores in catalog order.
    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }
}
