//! Closed enumerations describing a bug pattern.
//!
//! Each enum carries its per-variant constants (severity's `enabled` flag,
//! maturity's description, suppressibility's `disableable` flag) as `const fn`
//! accessors matched on the variant. Catalog files spell the variants as the
//! upper-snake tokens returned by `as_str()`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalize a token for case-insensitive parsing: `one-off`, `One Off` and
/// `ONE_OFF` all become `ONE_OFF`.
fn normalize_token(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_uppercase(),
        })
        .collect()
}

/// The type of link to show next to a reported diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkKind {
    /// Link to the generated documentation page for the pattern.
    #[default]
    Autogenerated,
    /// Link to a custom URL supplied with the pattern.
    Custom,
    /// No link is displayed.
    None,
}

impl LinkKind {
    pub const fn all() -> &'static [Self] {
        &[Self::Autogenerated, Self::Custom, Self::None]
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Autogenerated => "AUTOGENERATED",
            Self::Custom => "CUSTOM",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "AUTOGENERATED" => Ok(Self::Autogenerated),
            "CUSTOM" => Ok(Self::Custom),
            "NONE" => Ok(Self::None),
            _ => Err(format!("Unknown link kind: {s}")),
        }
    }
}

/// The class of bug a pattern detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// General Java or JDK errors.
    Jdk,
    /// Errors specific to Guava.
    Guava,
    /// Errors specific to Guice.
    Guice,
    /// Errors specific to Dagger.
    Dagger,
    /// Errors specific to JUnit.
    Junit,
    /// One-off matchers that are not general errors.
    OneOff,
    /// JSR-330 errors not specific to Guice.
    Inject,
    /// Errors specific to Mockito.
    Mockito,
    /// Errors specific to JMock.
    Jmock,
}

impl Category {
    /// All categories in declaration order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Jdk,
            Self::Guava,
            Self::Guice,
            Self::Dagger,
            Self::Junit,
            Self::OneOff,
            Self::Inject,
            Self::Mockito,
            Self::Jmock,
        ]
    }

    /// Catalog token.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jdk => "JDK",
            Self::Guava => "GUAVA",
            Self::Guice => "GUICE",
            Self::Dagger => "DAGGER",
            Self::Junit => "JUNIT",
            Self::OneOff => "ONE_OFF",
            Self::Inject => "INJECT",
            Self::Mockito => "MOCKITO",
            Self::Jmock => "JMOCK",
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Jdk => "JDK",
            Self::Guava => "Guava",
            Self::Guice => "Guice",
            Self::Dagger => "Dagger",
            Self::Junit => "JUnit",
            Self::OneOff => "One-off",
            Self::Inject => "Inject",
            Self::Mockito => "Mockito",
            Self::Jmock => "JMock",
        }
    }

    /// Description for listings.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Jdk => "General Java or JDK errors",
            Self::Guava => "Errors specific to Google Guava",
            Self::Guice => "Errors specific to Google Guice",
            Self::Dagger => "Errors specific to Dagger",
            Self::Junit => "Errors specific to JUnit",
            Self::OneOff => "One-off matchers that are not general errors",
            Self::Inject => "JSR-330 errors not specific to Guice",
            Self::Mockito => "Errors specific to Mockito",
            Self::Jmock => "Errors specific to JMock",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "JDK" => Ok(Self::Jdk),
            "GUAVA" => Ok(Self::Guava),
            "GUICE" => Ok(Self::Guice),
            "DAGGER" => Ok(Self::Dagger),
            "JUNIT" => Ok(Self::Junit),
            "ONE_OFF" | "ONEOFF" => Ok(Self::OneOff),
            "INJECT" => Ok(Self::Inject),
            "MOCKITO" => Ok(Self::Mockito),
            "JMOCK" => Ok(Self::Jmock),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// How serious a detected instance of a pattern is.
///
/// The derived ordering follows declaration order, so
/// `Error < Warning < Suggestion < NotAProblem`. Listings sorted by severity
/// therefore put errors first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityLevel {
    Error,
    Warning,
    Suggestion,
    /// Should not be used for general code.
    NotAProblem,
}

impl SeverityLevel {
    pub const fn all() -> &'static [Self] {
        &[Self::Error, Self::Warning, Self::Suggestion, Self::NotAProblem]
    }

    /// Whether patterns of this severity are reported at all.
    pub const fn enabled(&self) -> bool {
        match self {
            Self::Error | Self::Warning | Self::Suggestion => true,
            Self::NotAProblem => false,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Suggestion => "SUGGESTION",
            Self::NotAProblem => "NOT_A_PROBLEM",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "ERROR" => Ok(Self::Error),
            "WARNING" => Ok(Self::Warning),
            "SUGGESTION" => Ok(Self::Suggestion),
            "NOT_A_PROBLEM" | "NOTAPROBLEM" => Ok(Self::NotAProblem),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

/// Whether a check is stable enough to be on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaturityLevel {
    Mature,
    Experimental,
}

impl MaturityLevel {
    pub const fn all() -> &'static [Self] {
        &[Self::Mature, Self::Experimental]
    }

    /// Human-readable description shown in listings.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Mature => "On by default",
            Self::Experimental => "Experimental",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mature => "MATURE",
            Self::Experimental => "EXPERIMENTAL",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaturityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "MATURE" => Ok(Self::Mature),
            "EXPERIMENTAL" => Ok(Self::Experimental),
            _ => Err(format!("Unknown maturity: {s}")),
        }
    }
}

/// Whether a pattern can be suppressed, and by what means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suppressibility {
    /// Suppressed with the standard `@SuppressWarnings("Name")` mechanism.
    #[default]
    SuppressWarnings,
    /// Suppressed with a custom annotation on an enclosing node.
    CustomAnnotation,
    /// Cannot be suppressed.
    Unsuppressible,
}

impl Suppressibility {
    pub const fn all() -> &'static [Self] {
        &[
            Self::SuppressWarnings,
            Self::CustomAnnotation,
            Self::Unsuppressible,
        ]
    }

    /// True only when a suppression token can disable the pattern.
    pub const fn disableable(&self) -> bool {
        matches!(self, Self::SuppressWarnings)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SuppressWarnings => "SUPPRESS_WARNINGS",
            Self::CustomAnnotation => "CUSTOM_ANNOTATION",
            Self::Unsuppressible => "UNSUPPRESSIBLE",
        }
    }
}

impl fmt::Display for Suppressibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Suppressibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "SUPPRESS_WARNINGS" => Ok(Self::SuppressWarnings),
            "CUSTOM_ANNOTATION" => Ok(Self::CustomAnnotation),
            "UNSUPPRESSIBLE" => Ok(Self::Unsuppressible),
            _ => Err(format!("Unknown suppressibility: {s}")),
        }
    }
}
