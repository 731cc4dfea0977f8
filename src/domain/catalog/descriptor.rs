//! Framework descriptor value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Description of one candidate framework.
///
/// # Invariants
///
/// - `name` is non-empty and unique within the catalog (uniqueness is
///   enforced by [`Catalog`](super::Catalog))
/// - `description` is non-empty
/// - `website` is non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkDescriptor {
    /// Unique framework name, the key used by qualifying sets.
    name: String,

    /// Short human-readable description.
    description: String,

    /// Project website URL.
    website: String,
}

impl FrameworkDescriptor {
    /// Creates a new descriptor.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if any field is empty
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        website: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let description = description.into();
        let website = website.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        if website.trim().is_empty() {
            return Err(ValidationError::empty_field("website"));
        }

        Ok(Self {
            name,
            description,
            website,
        })
    }

    /// Returns the framework name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the website URL.
    pub fn website(&self) -> &str {
        &self.website
    }
}
