//! Catalog aggregate - ordered sequence of framework descriptors.

use std::collections::HashMap;

use crate::domain::foundation::{FrameworkId, ValidationError};

use super::FrameworkDescriptor;

/// The fixed, ordered catalog of candidate frameworks.
///
/// # Invariants
///
/// - non-empty
/// - framework names are unique
/// - order never changes after construction; a descriptor's position is its
///   [`FrameworkId`] and its index in every score vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    frameworks: Vec<FrameworkDescriptor>,

    /// Lookup from name to catalog position, derived from `frameworks`.
    by_name: HashMap<String, FrameworkId>,
}

impl Catalog {
    /// Creates a catalog from an ordered list of descriptors.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the list is empty
    /// - `InvalidFormat` if two descriptors share a name
    pub fn new(frameworks: Vec<FrameworkDescriptor>) -> Result<Self, ValidationError> {
        if frameworks.is_empty() {
            return Err(ValidationError::empty_field("frameworks"));
        }

        let mut by_name = HashMap::with_capacity(frameworks.len());
        for (index, descriptor) in frameworks.iter().enumerate() {
            let id = FrameworkId::from_index(index);
            if by_name.insert(descriptor.name().to_string(), id).is_some() {
                return Err(ValidationError::invalid_format(
                    "frameworks",
                    format!("duplicate framework name '{}'", descriptor.name()),
                ));
            }
        }

        Ok(Self {
            frameworks,
            by_name,
        })
    }

    /// Returns the number of frameworks in the catalog.
    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    /// Returns true if the catalog is empty. Always false for a constructed
    /// catalog; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }

    /// Returns the descriptor at the given id.
    pub fn get(&self, id: FrameworkId) -> Option<&FrameworkDescriptor> {
        self.frameworks.get(id.index())
    }

    /// Resolves a framework name to its id.
    pub fn id_of(&self, name: &str) -> Option<FrameworkId> {
        self.by_name.get(name).copied()
    }

    /// Returns true if the catalog contains a framework with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterates descriptors in catalog order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (FrameworkId, &FrameworkDescriptor)> {
        self.frameworks
            .iter()
            .enumerate()
            .map(|(index, descriptor)| (FrameworkId::from_index(index), descriptor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str) -> FrameworkDescriptor {
        FrameworkDescriptor::new(name, format!("{name} description"), "https://example.com")
            .unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![descriptor("A"), descriptor("B"), descriptor("C")]).unwrap()
    }

    #[test]
    fn new_rejects_empty_catalog() {
        assert!(Catalog::new(vec![]).is_err());
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let result = Catalog::new(vec![descriptor("A"), descriptor("A")]);
        assert!(result.is_err());
    }

    #[test]
    fn id_of_resolves_catalog_positions() {
        let catalog = catalog();
        assert_eq!(catalog.id_of("A"), Some(FrameworkId::from_index(0)));
        assert_eq!(catalog.id_of("C"), Some(FrameworkId::from_index(2)));
        assert_eq!(catalog.id_of("Unknown"), None);
    }

    #[test]
    fn get_returns_descriptor_at_position() {
        let catalog = catalog();
        let id = catalog.id_of("B").unwrap();
        assert_eq!(catalog.get(id).unwrap().name(), "B");
    }

    #[test]
    fn iter_preserves_catalog_order() {
        let catalog = catalog();
        let names: Vec<&str> = catalog.iter().map(|(_, d)| d.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn iter_ids_match_positions() {
        let catalog = catalog();
        for (id, descriptor) in catalog.iter() {
            assert_eq!(catalog.id_of(descriptor.name()), Some(id));
        }
    }
}
