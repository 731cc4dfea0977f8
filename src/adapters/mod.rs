//! Adapters - Implementations of ports against the outside world.
//!
//! The only adapter is the JSON file loader for the static questionnaire
//! data shipped alongside the application.

mod json_source;

pub use json_source::JsonFileSource;
