//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `catalog` - Framework descriptors, the ordered catalog, and score vectors
//! - `questionnaire` - Decision tree, preference questions, and session phases
//! - `session` - Questionnaire session aggregate and its transitions
//! - `scoring` - Pure domain services for score accumulation and ranking

pub mod catalog;
pub mod foundation;
pub mod questionnaire;
pub mod scoring;
pub mod session;
