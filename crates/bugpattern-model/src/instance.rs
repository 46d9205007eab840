//! Flat summary records for pattern listings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::descriptor::PatternDescriptor;
use crate::enums::{Category, MaturityLevel, SeverityLevel, Suppressibility};

/// One row of a pattern listing.
///
/// Alt names are joined with `", "` and a missing custom suppression
/// annotation is the empty string, so the record serializes to a flat table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternInstance {
    pub name: String,
    pub summary: String,
    pub alt_names: String,
    pub category: Category,
    pub maturity: MaturityLevel,
    pub severity: SeverityLevel,
    pub suppressibility: Suppressibility,
    pub custom_suppression_annotation: String,
}

impl PatternInstance {
    /// Orders by severity, errors first.
    pub fn by_severity(a: &Self, b: &Self) -> Ordering {
        a.severity.cmp(&b.severity)
    }

    /// Orders lexicographically by name.
    pub fn by_name(a: &Self, b: &Self) -> Ordering {
        a.name.cmp(&b.name)
    }
}

impl From<&PatternDescriptor> for PatternInstance {
    fn from(descriptor: &PatternDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            summary: descriptor.summary().to_string(),
            alt_names: descriptor.alt_names().join(", "),
            category: descriptor.category(),
            maturity: descriptor.maturity(),
            severity: descriptor.severity(),
            suppressibility: descriptor.suppressibility(),
            custom_suppression_annotation: descriptor
                .custom_suppression_annotation()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl PatternDescriptor {
    pub fn to_instance(&self) -> PatternInstance {
        PatternInstance::from(self)
    }
}
