//! Bug patterns compiled into the crate.
//!
//! The catalog is embedded with `include_str!()` so that a registry can be
//! built without any file I/O.

use std::path::Path;

use crate::catalog::{Catalog, parse_catalog};
use crate::error::Result;
use crate::registry::BugPatternRegistry;

/// The embedded catalog document.
pub const BUILTIN_CATALOG: &str = include_str!("../data/builtin.toml");

/// Decode the embedded catalog.
pub fn catalog() -> Result<Catalog> {
    parse_catalog(BUILTIN_CATALOG, Path::new("<builtin>"))
}

/// A registry holding only the built-in patterns.
pub fn load() -> Result<BugPatternRegistry> {
    BugPatternRegistry::from_catalog(catalog()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bugpattern_model::{Category, SeverityLevel};

    #[test]
    fn builtin_catalog_registers_cleanly() {
        let registry = load().expect("builtin catalog is valid");
        assert_eq!(registry.len(), 14);
        assert!(registry.contains("ThrowableInstanceNeverThrown"));
        assert!(registry.contains("GuardedBy"));
    }

    #[test]
    fn builtin_catalog_covers_every_category() {
        let registry = load().unwrap();
        for category in Category::all() {
            assert!(
                registry.by_category(*category).next().is_some(),
                "no builtin pattern for {category}"
            );
        }
    }

    #[test]
    fn builtin_summaries_follow_style() {
        let catalog = catalog().unwrap();
        for pattern in &catalog.patterns {
            assert!(!pattern.summary().ends_with('.'), "{}", pattern.name());
            assert_ne!(pattern.severity(), SeverityLevel::NotAProblem);
        }
    }
}
