//! Framework Advisor - Guided Framework Recommendation Engine
//!
//! This crate implements the scoring and traversal state machine behind a
//! guided questionnaire: a decision tree of qualifying questions narrows the
//! candidate frameworks, weighted preference questions accumulate a score
//! vector, and the top-scoring candidates are ranked and surfaced.
//!
//! Rendering, input handling, and styling are presentation-layer concerns and
//! live outside this crate; it consumes static questionnaire data and exposes
//! the [`application::Advisor`] facade.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
