//! Application layer - the facade the presentation layer talks to.
//!
//! This layer orchestrates domain operations: it owns the single mutable
//! session, routes submissions into it, and resolves final rankings against
//! the catalog for display.

mod advisor;

pub use advisor::{Advisor, PromptView, Recommendation};
