//! Ranking and selection of recommended frameworks.

use crate::domain::catalog::ScoreVector;
use crate::domain::foundation::FrameworkId;

/// Fraction of the top score a framework must strictly exceed to be
/// recommended. Tunable constant, preserved for behavioral compatibility.
pub const RECOMMENDATION_THRESHOLD: f64 = 0.8;

/// Maximum number of recommendations surfaced to the user.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// A framework paired with its final score, in ranked order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedFramework {
    pub id: FrameworkId,
    pub score: f64,
}

/// Pure service ranking a final score vector.
pub struct Recommender;

impl Recommender {
    /// Ranks a final score vector into at most [`MAX_RECOMMENDATIONS`]
    /// entries.
    ///
    /// Sorted descending by score; ties keep ascending catalog order (the
    /// sort is stable over the catalog-ordered input). Entries at or below
    /// `max_score * RECOMMENDATION_THRESHOLD` are dropped, so a zero
    /// `max_score` legitimately yields an empty list.
    pub fn rank(scores: &ScoreVector) -> Vec<RankedFramework> {
        let max_score = scores.max_score();

        let mut ranked: Vec<RankedFramework> = scores
            .iter()
            .map(|(id, score)| RankedFramework { id, score })
            .collect();
        // Stable sort over catalog order, so equal scores keep ascending
        // catalog index. Scores come from finite inputs; treat any
        // incomparable pair as equal rather than panicking.
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        ranked
            .into_iter()
            .filter(|entry| entry.score > max_score * RECOMMENDATION_THRESHOLD)
            .take(MAX_RECOMMENDATIONS)
            .collect()
    }
}
