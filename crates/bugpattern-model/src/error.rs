//! Descriptor validation errors.

use std::fmt;
use thiserror::Error;

/// The descriptor field an invariant applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorField {
    Name,
    AltNames,
    Link,
    Summary,
    CustomSuppressionAnnotation,
}

impl DescriptorField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::AltNames => "alt_names",
            Self::Link => "link",
            Self::Summary => "summary",
            Self::CustomSuppressionAnnotation => "custom_suppression_annotation",
        }
    }
}

impl fmt::Display for DescriptorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A data-model invariant violated by a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct DescriptorError {
    pub field: DescriptorField,
    pub reason: String,
}

impl DescriptorError {
    pub(crate) fn new(field: DescriptorField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for descriptor validation.
pub type Result<T> = std::result::Result<T, DescriptorError>;
