//! Registry configuration.
//!
//! ```toml
//! include_builtin = true
//! docs_base_url = "https://errorprone.info/bugpattern"
//! catalogs = ["patterns/core.toml", "patterns/extra.toml"]
//! ```
//!
//! Relative catalog paths resolve against the configuration file's
//! directory.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use bugpattern_model::PatternDescriptor;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{RegistryError, Result};

/// Base URL for autogenerated documentation links.
pub const DEFAULT_DOCS_BASE_URL: &str = "https://errorprone.info/bugpattern";

/// Environment variable naming one extra catalog file.
pub const CATALOG_ENV_VAR: &str = "BUGPATTERN_CATALOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Start from the patterns compiled into the crate.
    pub include_builtin: bool,
    /// Prefix for autogenerated documentation links.
    pub docs_base_url: String,
    /// Catalog files loaded in order.
    pub catalogs: Vec<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            catalogs: Vec::new(),
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| RegistryError::io(path, e))?;
        let mut config: Self = toml::from_str(&text).map_err(|e| RegistryError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for catalog in &mut config.catalogs {
            if catalog.is_relative() {
                *catalog = base.join(&*catalog);
            }
        }

        info!(
            path = %path.display(),
            catalogs = config.catalogs.len(),
            "Loaded registry config"
        );
        Ok(config)
    }

    #[must_use]
    pub fn with_builtin(mut self, include: bool) -> Self {
        self.include_builtin = include;
        self
    }

    #[must_use]
    pub fn with_docs_base_url(mut self, url: impl Into<String>) -> Self {
        self.docs_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalogs.push(path.into());
        self
    }

    /// Append the catalog named by `BUGPATTERN_CATALOG`, if set.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_catalog_override(std::env::var_os(CATALOG_ENV_VAR))
    }

    fn with_catalog_override(self, value: Option<OsString>) -> Self {
        match value {
            Some(path) if !path.is_empty() => {
                debug!(path = ?path, "Adding catalog from {CATALOG_ENV_VAR}");
                self.with_catalog(path)
            }
            _ => self,
        }
    }

    /// Documentation link for `descriptor` under this configuration.
    pub fn documentation_link(&self, descriptor: &PatternDescriptor) -> Option<String> {
        descriptor.documentation_link(&self.docs_base_url)
    }
}
