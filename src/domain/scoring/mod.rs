//! Scoring module - Pure domain services for score accumulation and ranking.
//!
//! - `scorer` - initial vector construction and weighted contributions
//! - `ranking` - threshold filtering and top-N selection

mod ranking;
mod scorer;

pub use ranking::{RankedFramework, Recommender, MAX_RECOMMENDATIONS, RECOMMENDATION_THRESHOLD};
pub use scorer::{PreferenceScorer, TREE_SCALING_FACTOR};
