//! Template module - the persisted unit of extraction knowledge

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque catalog key identifying one template
///
/// Ids are assigned by the import tooling that populates the catalog; the
/// engine never generates or interprets them beyond equality and display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Wrap a raw catalog key
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TemplateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A parsing template: command signature plus extraction-grammar body
///
/// Templates are immutable once stored. They are created by out-of-band
/// import tooling and read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Opaque catalog key
    pub id: TemplateId,

    /// Canonical string identifying which device command this template
    /// targets, e.g. `cisco_ios_show_version`
    pub command: String,

    /// Extraction-grammar source; compiled at evaluation time
    pub body: String,
}

impl Template {
    /// Create a new template
    pub fn new(
        id: impl Into<TemplateId>,
        command: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            command: command.into(),
            body: body.into(),
        }
    }
}
