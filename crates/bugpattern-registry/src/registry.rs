//! Registry of bug pattern descriptors indexed by every suppression token.

use std::collections::HashMap;
use std::sync::Arc;

use bugpattern_model::{Category, PatternDescriptor, PatternInstance};
use tracing::{debug, info, warn};

use crate::error::{RegistryError, Result};

/// Owns the registered descriptors and guarantees that no two of them share
/// a name or alt name.
///
/// Descriptors are kept in insertion order; `index` maps each identifier to
/// its descriptor's position.
#[derive(Debug, Clone, Default)]
pub struct BugPatternRegistry {
    patterns: Vec<PatternDescriptor>,
    index: HashMap<String, usize>,
}

impl BugPatternRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            patterns: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a descriptor.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidDescriptor`] if the descriptor breaks one of
    ///   its invariants.
    /// - [`RegistryError::DuplicateIdentifier`] if its name or an alt name
    ///   is already claimed.
    ///
    /// The registry is unchanged when an error is returned.
    pub fn register(&mut self, descriptor: PatternDescriptor) -> Result<()> {
        descriptor
            .validate()
            .map_err(|e| RegistryError::invalid(descriptor.name(), e))?;
        self.check_unclaimed(&descriptor)?;
        self.insert_checked(descriptor);
        Ok(())
    }

    /// Register a batch of descriptors, all or none.
    ///
    /// Each descriptor is checked against the registry and against the rest
    /// of the batch before anything is inserted.
    pub fn register_all<I>(&mut self, descriptors: I) -> Result<()>
    where
        I: IntoIterator<Item = PatternDescriptor>,
    {
        let batch: Vec<PatternDescriptor> = descriptors.into_iter().collect();

        let mut claimed: HashMap<&str, &str> = HashMap::new();
        for descriptor in &batch {
            descriptor
                .validate()
                .map_err(|e| RegistryError::invalid(descriptor.name(), e))?;
            self.check_unclaimed(descriptor)?;
            for identifier in descriptor.identifiers() {
                if let Some(owner) = claimed.insert(identifier, descriptor.name()) {
                    return Err(RegistryError::DuplicateIdentifier {
                        identifier: identifier.to_string(),
                        conflicting_name: owner.to_string(),
                    });
                }
            }
        }

        let count = batch.len();
        for descriptor in batch {
            self.insert_checked(descriptor);
        }
        info!(count, total = self.len(), "Registered bug pattern batch");
        Ok(())
    }

    fn check_unclaimed(&self, descriptor: &PatternDescriptor) -> Result<()> {
        for identifier in descriptor.identifiers() {
            if let Some(&idx) = self.index.get(identifier) {
                return Err(RegistryError::DuplicateIdentifier {
                    identifier: identifier.to_string(),
                    conflicting_name: self.patterns[idx].name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Caller has validated the descriptor and checked its identifiers.
    fn insert_checked(&mut self, descriptor: PatternDescriptor) {
        let idx = self.patterns.len();
        for identifier in descriptor.identifiers() {
            self.index.insert(identifier.to_string(), idx);
        }
        debug!(
            name = descriptor.name(),
            alt_names = descriptor.alt_names().len(),
            severity = %descriptor.severity(),
            category = %descriptor.category(),
            "Registered bug pattern"
        );
        self.patterns.push(descriptor);
    }

    /// Resolve a name or alt name. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] when no descriptor claims `identifier`.
    pub fn lookup(&self, identifier: &str) -> Result<&PatternDescriptor> {
        self.get(identifier).ok_or_else(|| {
            warn!(identifier, "Unknown bug pattern identifier");
            RegistryError::NotFound {
                identifier: identifier.to_string(),
            }
        })
    }

    /// Like [`lookup`](Self::lookup), but returns `None` on a miss.
    pub fn get(&self, identifier: &str) -> Option<&PatternDescriptor> {
        self.index.get(identifier).map(|&idx| &self.patterns[idx])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Resolve a suppression token to a pattern that it can disable.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NotFound`] for an unknown token, and
    /// [`RegistryError::NotSuppressible`] when the pattern is suppressed only
    /// through a custom annotation or not at all.
    pub fn resolve_suppression(&self, token: &str) -> Result<&PatternDescriptor> {
        let descriptor = self.lookup(token)?;
        if !descriptor.suppressibility().disableable() {
            warn!(
                token,
                name = descriptor.name(),
                suppressibility = %descriptor.suppressibility(),
                "Suppression token names a pattern that cannot be suppressed by name"
            );
            return Err(RegistryError::NotSuppressible {
                identifier: token.to_string(),
                suppressibility: descriptor.suppressibility(),
            });
        }
        Ok(descriptor)
    }

    /// Number of registered patterns (not identifiers).
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over all descriptors in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &PatternDescriptor> {
        self.patterns.iter()
    }

    /// Every claimed identifier, names and alt names, in insertion order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().flat_map(|d| d.identifiers())
    }

    /// Descriptors ordered by severity, errors first. Patterns of equal
    /// severity keep their insertion order.
    pub fn sorted_by_severity(&self) -> Vec<&PatternDescriptor> {
        let mut sorted: Vec<&PatternDescriptor> = self.patterns.iter().collect();
        sorted.sort_by_key(|d| d.severity());
        sorted
    }

    /// Descriptors ordered lexicographically by name.
    pub fn sorted_by_name(&self) -> Vec<&PatternDescriptor> {
        let mut sorted: Vec<&PatternDescriptor> = self.patterns.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &PatternDescriptor> {
        self.patterns
            .iter()
            .filter(move |d| d.category() == category)
    }

    /// Descriptors whose severity is reported.
    pub fn enabled(&self) -> impl Iterator<Item = &PatternDescriptor> {
        self.patterns.iter().filter(|d| d.severity().enabled())
    }

    /// Listing rows in insertion order.
    pub fn instances(&self) -> Vec<PatternInstance> {
        self.patterns
            .iter()
            .map(PatternDescriptor::to_instance)
            .collect()
    }

    /// Stop accepting registrations and share the registry read-only.
    pub fn freeze(self) -> FrozenRegistry {
        info!(
            patterns = self.len(),
            identifiers = self.index.len(),
            "Froze bug pattern registry"
        );
        FrozenRegistry {
            inner: Arc::new(self),
        }
    }
}

/// Read-only, cheaply clonable handle to a registry that no longer accepts
/// registrations. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct FrozenRegistry {
    inner: Arc<BugPatternRegistry>,
}

impl FrozenRegistry {
    pub fn registry(&self) -> &BugPatternRegistry {
        &self.inner
    }
}

impl std::ops::Deref for FrozenRegistry {
    type Target = BugPatternRegistry;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<BugPatternRegistry> for FrozenRegistry {
    fn as_ref(&self) -> &BugPatternRegistry {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugpattern_model::{MaturityLevel, SeverityLevel, Suppressibility};

    fn pattern(name: &str, severity: SeverityLevel) -> PatternDescriptor {
        PatternDescriptor::new(
            name,
            Category::Jdk,
            severity,
            MaturityLevel::Mature,
            "Test pattern",
        )
    }

    #[test]
    fn empty_registry() {
        let registry = BugPatternRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.all().count(), 0);
        assert!(registry.sorted_by_name().is_empty());
    }

    #[test]
    fn index_covers_alt_names() {
        let mut registry = BugPatternRegistry::new();
        let dead = pattern("DeadException", SeverityLevel::Error)
            .with_alt_name("ThrowableInstanceNeverThrown");
        registry.register(dead).unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.index.len(), 2);
        assert!(registry.contains("ThrowableInstanceNeverThrown"));
        assert_eq!(
            registry.get("ThrowableInstanceNeverThrown").map(|d| d.name()),
            Some("DeadException")
        );
    }

    #[test]
    fn failed_register_leaves_index_untouched() {
        let mut registry = BugPatternRegistry::new();
        registry.register(pattern("A", SeverityLevel::Error)).unwrap();

        let clash = pattern("B", SeverityLevel::Error).with_alt_names(["B2", "A"]);
        assert!(registry.register(clash).is_err());
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains("B"));
        assert!(!registry.contains("B2"));
    }

    #[test]
    fn invalid_descriptor_reports_name_and_field() {
        let mut registry = BugPatternRegistry::new();
        let err = registry
            .register(
                pattern("Odd", SeverityLevel::Warning)
                    .with_suppressibility(Suppressibility::CustomAnnotation),
            )
            .unwrap_err();
        match err {
            RegistryError::InvalidDescriptor { name, field, .. } => {
                assert_eq!(name, "Odd");
                assert_eq!(field, bugpattern_model::DescriptorField::CustomSuppressionAnnotation);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn freeze_keeps_contents() {
        let mut registry = BugPatternRegistry::new();
        registry.register(pattern("A", SeverityLevel::Error)).unwrap();
        let frozen = registry.freeze();
        let clone = frozen.clone();
        assert_eq!(clone.len(), 1);
        assert!(frozen.registry().lookup("A").is_ok());
    }
}
