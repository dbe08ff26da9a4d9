//! tmatch Engine Layer
//!
//! The template auto-matching core: evaluates catalog candidates against a
//! raw CLI capture and selects the best fit via the domain scoring formula.
//!
//! ```no_run
//! use tmatch_engine::Matcher;
//! use tmatch_store::SqliteCatalog;
//!
//! let catalog = SqliteCatalog::open("catalog.db").unwrap();
//! let matcher = Matcher::default();
//! let result = matcher
//!     .find_best(&catalog, "Cisco IOS Software, Version 15.2", Some("show_version"))
//!     .unwrap();
//! ```
//!
//! Per-template evaluation failures never abort a search; only a store
//! failure does. A search where nothing scores above zero returns the
//! no-match sentinel, not an error.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod matcher;

pub use config::EngineConfig;
pub use error::{EngineError, EvalError};
pub use evaluator::evaluate;
pub use matcher::Matcher;
