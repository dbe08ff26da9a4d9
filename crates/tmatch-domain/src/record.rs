//! ParsedRecord - one structured row of extracted field/value pairs
//!
//! Field sets are not known until a template is loaded, so a record is an
//! ordered map built at evaluation time by zipping the grammar runtime's
//! header row to each data row.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered field-name to value mapping
///
/// Iteration order is the template's declared field order. Rows shorter than
/// the header are padded with empty values so every record of one evaluation
/// has the same field set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedRecord(IndexMap<String, String>);

impl ParsedRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip a header row to a data row, in header order
    pub fn from_header(header: &[String], row: &[String]) -> Self {
        let mut fields = IndexMap::with_capacity(header.len());
        for (i, name) in header.iter().enumerate() {
            let value = row.get(i).cloned().unwrap_or_default();
            fields.insert(name.clone(), value);
        }
        Self(fields)
    }

    /// Insert one field, preserving insertion order
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Look up a field value
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Number of fields in this record
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this record has no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields whose value is non-empty after trimming
    pub fn populated_count(&self) -> usize {
        self.0.values().filter(|v| !v.trim().is_empty()).count()
    }

    /// Iterate over fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
