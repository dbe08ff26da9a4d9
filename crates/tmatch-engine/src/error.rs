//! Error types for the matching engine

use thiserror::Error;
use tmatch_grammar::GrammarError;

/// Errors that abort a whole matching request
#[derive(Error, Debug)]
pub enum EngineError {
    /// Catalog could not be opened or queried; fatal for the in-flight
    /// request and not retried internally
    #[error("catalog unavailable: {0}")]
    StoreUnavailable(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// One template's grammar failed to compile or execute
///
/// Always recovered locally by the selector: the candidate contributes
/// zero records and the search continues.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Template body rejected by the grammar runtime
    #[error("grammar error: {0}")]
    Grammar(#[from] GrammarError),
}
