//! Registry of static-analysis bug patterns.
//!
//! This crate provides:
//!
//! - [`BugPatternRegistry`]: descriptors indexed by name and alt names, with
//!   uniqueness enforced at registration and sorted views for listings
//! - [`FrozenRegistry`]: the read-only handle shared once registration is
//!   over
//! - TOML catalogs of pattern declarations, including the built-in catalog
//! - [`RegistryConfig`]: which catalogs to load and how to build links
//!
//! # Example
//!
//! ```
//! use bugpattern_registry::{BugPatternRegistry, RegistryError};
//! use bugpattern_model::{Category, MaturityLevel, PatternDescriptor, SeverityLevel};
//!
//! let mut registry = BugPatternRegistry::new();
//! registry.register(
//!     PatternDescriptor::new(
//!         "DeadException",
//!         Category::Jdk,
//!         SeverityLevel::Error,
//!         MaturityLevel::Mature,
//!         "Exception created but not thrown",
//!     )
//!     .with_alt_name("ThrowableInstanceNeverThrown"),
//! )?;
//!
//! let registry = registry.freeze();
//! let pattern = registry.lookup("ThrowableInstanceNeverThrown")?;
//! assert_eq!(pattern.name(), "DeadException");
//! # Ok::<(), RegistryError>(())
//! ```

pub mod builtin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod registry;

pub use catalog::{Catalog, CatalogHeader, load_catalog, load_registry, parse_catalog};
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::{BugPatternRegistry, FrozenRegistry};
