//! The bug pattern descriptor.

use serde::{Deserialize, Serialize};

use crate::enums::{Category, LinkKind, MaturityLevel, SeverityLevel, Suppressibility};
use crate::error::{DescriptorError, DescriptorField, Result};

/// Identity and classification metadata for one bug pattern.
///
/// Built once with [`PatternDescriptor::new`] and the `with_*` setters, or
/// decoded from a catalog, and never mutated afterwards. Construction does
/// not check invariants; [`PatternDescriptor::validate`] does, and the
/// registry calls it before accepting a descriptor.
///
/// # Example
///
/// ```
/// use bugpattern_model::{Category, MaturityLevel, PatternDescriptor, SeverityLevel};
///
/// let descriptor = PatternDescriptor::new(
///     "DeadException",
///     Category::Jdk,
///     SeverityLevel::Error,
///     MaturityLevel::Mature,
///     "Exception created but not thrown",
/// )
/// .with_alt_name("ThrowableInstanceNeverThrown");
///
/// assert!(descriptor.validate().is_ok());
/// assert!(descriptor.matches("ThrowableInstanceNeverThrown"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternDescriptor {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    alt_names: Vec<String>,
    #[serde(default)]
    link_kind: LinkKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    category: Category,
    summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
    severity: SeverityLevel,
    maturity: MaturityLevel,
    #[serde(default)]
    suppressibility: Suppressibility,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_suppression_annotation: Option<String>,
}

impl PatternDescriptor {
    /// Create a descriptor with the required fields. Optional fields take
    /// their defaults: no alt names, autogenerated link, no explanation,
    /// suppressible with `@SuppressWarnings`.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        severity: SeverityLevel,
        maturity: MaturityLevel,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            alt_names: Vec::new(),
            link_kind: LinkKind::default(),
            link: None,
            category,
            summary: summary.into(),
            explanation: None,
            severity,
            maturity,
            suppressibility: Suppressibility::default(),
            custom_suppression_annotation: None,
        }
    }

    #[must_use]
    pub fn with_alt_name(mut self, alt_name: impl Into<String>) -> Self {
        self.alt_names.push(alt_name.into());
        self
    }

    #[must_use]
    pub fn with_alt_names<I, S>(mut self, alt_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alt_names.extend(alt_names.into_iter().map(Into::into));
        self
    }

    /// Use a custom documentation link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link_kind = LinkKind::Custom;
        self.link = Some(link.into());
        self
    }

    /// Set the link kind without touching the link itself.
    #[must_use]
    pub fn with_link_kind(mut self, link_kind: LinkKind) -> Self {
        self.link_kind = link_kind;
        self
    }

    /// Show no documentation link.
    #[must_use]
    pub fn without_link(mut self) -> Self {
        self.link_kind = LinkKind::None;
        self.link = None;
        self
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Set the suppressibility without touching the custom annotation.
    #[must_use]
    pub fn with_suppressibility(mut self, suppressibility: Suppressibility) -> Self {
        self.suppressibility = suppressibility;
        self
    }

    /// Make the pattern suppressible only through `annotation`.
    #[must_use]
    pub fn with_custom_suppression(mut self, annotation: impl Into<String>) -> Self {
        self.suppressibility = Suppressibility::CustomAnnotation;
        self.custom_suppression_annotation = Some(annotation.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alt_names(&self) -> &[String] {
        &self.alt_names
    }

    pub fn link_kind(&self) -> LinkKind {
        self.link_kind
    }

    /// The custom link. Only a [`LinkKind::Custom`] descriptor carries a
    /// non-blank one.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Markdown explanation, if any.
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    pub fn severity(&self) -> SeverityLevel {
        self.severity
    }

    pub fn maturity(&self) -> MaturityLevel {
        self.maturity
    }

    pub fn suppressibility(&self) -> Suppressibility {
        self.suppressibility
    }

    pub fn custom_suppression_annotation(&self) -> Option<&str> {
        self.custom_suppression_annotation.as_deref()
    }

    /// Every suppression token for this pattern: the name, then alt names.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.alt_names.iter().map(String::as_str))
    }

    /// Exact, case-sensitive match against the name or any alt name.
    pub fn matches(&self, identifier: &str) -> bool {
        self.identifiers().any(|id| id == identifier)
    }

    /// Resolve the documentation link shown with diagnostics.
    ///
    /// Autogenerated links point at `{base_url}/{name}`.
    pub fn documentation_link(&self, base_url: &str) -> Option<String> {
        match self.link_kind {
            LinkKind::Autogenerated => {
                Some(format!("{}/{}", base_url.trim_end_matches('/'), self.name))
            }
            LinkKind::Custom => self.link.clone(),
            LinkKind::None => None,
        }
    }

    /// Check the descriptor's own invariants.
    ///
    /// Uniqueness across a registry is the registry's concern; this only
    /// rejects a descriptor that repeats one of its own tokens.
    pub fn validate(&self) -> Result<()> {
        check_token(&self.name, DescriptorField::Name)?;
        for alt_name in &self.alt_names {
            check_token(alt_name, DescriptorField::AltNames)?;
        }
        for (idx, alt_name) in self.alt_names.iter().enumerate() {
            if *alt_name == self.name {
                return Err(DescriptorError::new(
                    DescriptorField::AltNames,
                    format!("alt name '{alt_name}' repeats the pattern name"),
                ));
            }
            if self.alt_names[..idx].contains(alt_name) {
                return Err(DescriptorError::new(
                    DescriptorField::AltNames,
                    format!("alt name '{alt_name}' is listed more than once"),
                ));
            }
        }

        if self.summary.trim().is_empty() {
            return Err(DescriptorError::new(
                DescriptorField::Summary,
                "summary must not be empty",
            ));
        }
        if self.summary.trim_end().ends_with('.') {
            return Err(DescriptorError::new(
                DescriptorField::Summary,
                "summary must not end with a period",
            ));
        }

        let link_present = self.link.as_deref().is_some_and(|l| !l.trim().is_empty());
        match (self.link_kind, link_present) {
            (LinkKind::Custom, false) => {
                return Err(DescriptorError::new(
                    DescriptorField::Link,
                    "a custom link kind requires a non-empty link",
                ));
            }
            (LinkKind::Autogenerated | LinkKind::None, true) => {
                return Err(DescriptorError::new(
                    DescriptorField::Link,
                    format!("a link is only allowed with link kind CUSTOM, not {}", self.link_kind),
                ));
            }
            _ => {}
        }

        let annotation_present = self
            .custom_suppression_annotation
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty());
        match (self.suppressibility, annotation_present) {
            (Suppressibility::CustomAnnotation, false) => {
                return Err(DescriptorError::new(
                    DescriptorField::CustomSuppressionAnnotation,
                    "CUSTOM_ANNOTATION suppressibility requires an annotation",
                ));
            }
            (Suppressibility::SuppressWarnings | Suppressibility::Unsuppressible, true) => {
                return Err(DescriptorError::new(
                    DescriptorField::CustomSuppressionAnnotation,
                    format!(
                        "a custom suppression annotation is only allowed with CUSTOM_ANNOTATION, not {}",
                        self.suppressibility
                    ),
                ));
            }
            _ => {}
        }

        Ok(())
    }
}

/// Names and alt names are written verbatim in suppression directives.
fn check_token(token: &str, field: DescriptorField) -> Result<()> {
    if token.is_empty() {
        return Err(DescriptorError::new(field, "identifier must not be empty"));
    }
    if token.chars().any(char::is_whitespace) {
        return Err(DescriptorError::new(
            field,
            format!("identifier '{token}' must not contain whitespace"),
        ));
    }
    Ok(())
}
