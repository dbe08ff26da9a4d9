//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::template::Template;
use std::collections::BTreeSet;

/// Trait for querying the persisted template catalog
///
/// Implemented by the infrastructure layer (tmatch-store). The catalog is
/// read-only to the engine; templates are populated by out-of-band import
/// tooling.
pub trait TemplateCatalog {
    /// Error type for catalog operations
    type Error;

    /// Return every template whose command signature contains all of
    /// `terms` as case-insensitive substrings
    ///
    /// An empty term set returns the whole catalog. Result order must be
    /// stable for a fixed catalog state; the best-match selector's
    /// first-seen tie-break depends on it.
    fn query(&self, terms: &BTreeSet<String>) -> Result<Vec<Template>, Self::Error>;
}
