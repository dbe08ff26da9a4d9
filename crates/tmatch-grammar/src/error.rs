//! Error types for the grammar runtime

use thiserror::Error;

/// Errors raised while compiling a template body
#[derive(Error, Debug)]
pub enum GrammarError {
    /// Body contained nothing but blanks and comments
    #[error("empty template body")]
    EmptyBody,

    /// Body has rules but never declares a value
    #[error("template declares no values")]
    NoValues,

    /// Body never opens a `Start` section
    #[error("missing Start section")]
    MissingStart,

    /// Line could not be parsed as a declaration or rule
    #[error("syntax error at line {line}: {message}")]
    Syntax {
        /// 1-based line number within the template body
        line: usize,
        /// What was expected
        message: String,
    },

    /// Rule interpolates a value that was never declared
    #[error("rule references undeclared value '{0}'")]
    UnknownValue(String),

    /// A rule pattern failed to compile as a regular expression
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
