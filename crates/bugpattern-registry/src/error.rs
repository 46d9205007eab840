//! Error types for registry operations.

use std::path::PathBuf;

use bugpattern_model::{DescriptorError, DescriptorField, Suppressibility};
use thiserror::Error;

/// Errors raised while registering, resolving or loading bug patterns.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// A descriptor violates a data-model invariant.
    #[error("invalid bug pattern '{name}': {field}: {reason}")]
    InvalidDescriptor {
        name: String,
        field: DescriptorField,
        reason: String,
    },

    /// A name or alt name is already claimed by another pattern.
    #[error("identifier '{identifier}' is already registered by '{conflicting_name}'")]
    DuplicateIdentifier {
        identifier: String,
        conflicting_name: String,
    },

    /// No pattern has this name or alt name.
    #[error("no bug pattern registered as '{identifier}'")]
    NotFound { identifier: String },

    /// The pattern exists but cannot be disabled by a suppression token.
    #[error("bug pattern '{identifier}' cannot be suppressed by name ({suppressibility})")]
    NotSuppressible {
        identifier: String,
        suppressibility: Suppressibility,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid catalog {path}: {message}")]
    InvalidCatalog { path: PathBuf, message: String },

    #[error("failed to serialize catalog: {0}")]
    CatalogSerialize(#[from] toml::ser::Error),

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl RegistryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(name: &str, error: DescriptorError) -> Self {
        Self::InvalidDescriptor {
            name: name.to_string(),
            field: error.field,
            reason: error.reason,
        }
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
