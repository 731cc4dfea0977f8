//! Preference scorer - builds and accumulates score vectors.

use crate::domain::catalog::{Catalog, ScoreVector};
use crate::domain::questionnaire::{PreferenceAnswer, PreferenceQuestion};

/// Base weight granted per preference question to frameworks in the
/// qualifying set.
///
/// Tunable constant: the value has no derivation, it balances tree
/// qualification against preference answers so that neither dominates as the
/// preference list grows. Preserved exactly for behavioral compatibility.
pub const TREE_SCALING_FACTOR: f64 = 0.5;

/// Pure service computing score vectors.
pub struct PreferenceScorer;

impl PreferenceScorer {
    /// Builds the initial score vector from the tree phase's qualifying set.
    ///
    /// Every framework named in `qualifying` starts at
    /// `preference_count * TREE_SCALING_FACTOR`; everything else starts at
    /// zero. The vector is positionally aligned with the catalog.
    ///
    /// # Edge Cases
    /// - Empty qualifying set: all-zero vector
    /// - Zero preference questions: all-zero vector (scaling factor is 0)
    pub fn initial_vector(
        catalog: &Catalog,
        qualifying: &[String],
        preference_count: usize,
    ) -> ScoreVector {
        let base = preference_count as f64 * TREE_SCALING_FACTOR;
        let mut vector = ScoreVector::zeros(catalog.len());
        for name in qualifying {
            if let Some(id) = catalog.id_of(name) {
                vector.set(id, base);
            }
        }
        vector
    }

    /// Computes one answer's weighted contribution vector.
    ///
    /// The answer's raw weights are scaled elementwise by the question's
    /// importance coefficient.
    pub fn contribution(question: &PreferenceQuestion, answer: &PreferenceAnswer) -> ScoreVector {
        ScoreVector::from_raw(answer.weights().to_vec()).scaled(question.importance_coefficient())
    }
}
