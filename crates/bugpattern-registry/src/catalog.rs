//! TOML catalogs of bug pattern declarations.
//!
//! ```toml
//! [catalog]
//! schema = "bugpattern.catalog"
//! schema_version = 1
//!
//! [[pattern]]
//! name = "DeadException"
//! alt_names = ["ThrowableInstanceNeverThrown"]
//! category = "JDK"
//! summary = "Exception created but not thrown"
//! severity = "ERROR"
//! maturity = "MATURE"
//! ```

use std::fs;
use std::path::Path;

use bugpattern_model::PatternDescriptor;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::builtin;
use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::registry::BugPatternRegistry;

pub const CATALOG_SCHEMA: &str = "bugpattern.catalog";
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub catalog: CatalogHeader,
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogHeader {
    pub schema: String,
    pub schema_version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for CatalogHeader {
    fn default() -> Self {
        Self {
            schema: CATALOG_SCHEMA.to_string(),
            schema_version: CATALOG_SCHEMA_VERSION,
            description: None,
        }
    }
}

impl Catalog {
    pub fn new(patterns: Vec<PatternDescriptor>) -> Self {
        Self {
            catalog: CatalogHeader::default(),
            patterns,
        }
    }

    fn check_header(&self, source: &Path) -> Result<()> {
        if self.catalog.schema != CATALOG_SCHEMA {
            return Err(RegistryError::InvalidCatalog {
                path: source.to_path_buf(),
                message: format!(
                    "unexpected schema '{}' (expected '{CATALOG_SCHEMA}')",
                    self.catalog.schema
                ),
            });
        }
        if self.catalog.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(RegistryError::InvalidCatalog {
                path: source.to_path_buf(),
                message: format!(
                    "unsupported schema_version {} (expected {CATALOG_SCHEMA_VERSION})",
                    self.catalog.schema_version
                ),
            });
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Decode a catalog document. `source` names the document in errors.
pub fn parse_catalog(text: &str, source: &Path) -> Result<Catalog> {
    let catalog: Catalog = toml::from_str(text).map_err(|e| RegistryError::CatalogParse {
        path: source.to_path_buf(),
        source: e,
    })?;
    catalog.check_header(source)?;
    Ok(catalog)
}

/// Read and decode a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let text = fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
    let catalog = parse_catalog(&text, path)?;
    info!(
        path = %path.display(),
        patterns = catalog.patterns.len(),
        "Loaded bug pattern catalog"
    );
    Ok(catalog)
}

/// Load every catalog listed in `config`, in order, into one registry.
///
/// The built-in patterns come first when `config.include_builtin` is set.
///
/// # Errors
///
/// The first unreadable catalog, invalid descriptor or identifier clash
/// (within a catalog or across catalogs) aborts loading.
pub fn load_registry(config: &RegistryConfig) -> Result<BugPatternRegistry> {
    let mut registry = if config.include_builtin {
        builtin::load()?
    } else {
        BugPatternRegistry::new()
    };
    for path in &config.catalogs {
        let catalog = load_catalog(path)?;
        registry.register_all(catalog.patterns)?;
    }
    info!(
        catalogs = config.catalogs.len(),
        patterns = registry.len(),
        "Bug pattern registry loaded"
    );
    Ok(registry)
}

impl BugPatternRegistry {
    /// Build a registry from one catalog, all or none.
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let mut registry = Self::new();
        registry.register_all(catalog.patterns)?;
        Ok(registry)
    }

    /// Export the registered patterns as a catalog, in insertion order.
    pub fn to_catalog(&self) -> Catalog {
        Catalog::new(self.all().cloned().collect())
    }
}
