//! Catalog module - the fixed, ordered set of candidate frameworks.
//!
//! The catalog's order is load-bearing: a framework's position in the catalog
//! is its position in every score vector. [`FrameworkId`] wraps that position
//! so vector and catalog indexing stay aligned by construction.
//!
//! [`FrameworkId`]: crate::domain::foundation::FrameworkId

mod descriptor;
mod score_vector;

#[allow(clippy::module_inception)]
mod catalog;

pub use catalog::Catalog;
pub use descriptor::FrameworkDescriptor;
pub use score_vector::ScoreVector;
