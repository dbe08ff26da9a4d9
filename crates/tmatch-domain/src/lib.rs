//! tmatch Domain Layer
//!
//! This crate contains the core business logic and domain model for the
//! template auto-matching engine. It defines the fundamental types, the
//! candidate-filter decomposition, the scoring formula, and the trait
//! interfaces that the storage and engine layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Template**: a persisted extraction grammar targeting one CLI command
//! - **ParsedRecord**: one structured row extracted from raw device output
//! - **MatchResult**: winning template, its records, and its fitness score
//! - **Scoring**: deterministic multi-factor fitness formula (see [`score`])
//!
//! ## Architecture
//!
//! - Pure logic only; no I/O
//! - Infrastructure implementations (SQLite catalog, grammar runtime) live
//!   in other crates
//! - Trait definitions for the storage seam

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod match_result;
pub mod record;
pub mod score;
pub mod template;
pub mod traits;

// Re-exports for convenience
pub use filter::filter_terms;
pub use match_result::MatchResult;
pub use record::ParsedRecord;
pub use score::{score_candidate, ScoreConfig};
pub use template::{Template, TemplateId};
pub use traits::TemplateCatalog;
