//! Bug pattern data model.
//!
//! A [`PatternDescriptor`] records a static-analysis bug pattern's identity
//! (name and alternate suppression tokens), classification (category,
//! severity, maturity), suppressibility and documentation link. The
//! enumerations carry their per-variant constants, and
//! [`PatternInstance`] is the flat record used for listings.
//!
//! # Module Organization
//!
//! - [`enums`]: closed enumerations (link kind, category, severity, maturity,
//!   suppressibility)
//! - [`descriptor`]: the descriptor value type and its invariants
//! - [`instance`]: flat listing records and their comparators
//! - [`error`]: validation errors

pub mod descriptor;
pub mod enums;
pub mod error;
pub mod instance;

pub use descriptor::PatternDescriptor;
pub use enums::{Category, LinkKind, MaturityLevel, SeverityLevel, Suppressibility};
pub use error::{DescriptorError, DescriptorField, Result};
pub use instance::PatternInstance;
