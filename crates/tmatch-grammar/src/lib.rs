//! tmatch Extraction-Grammar Runtime
//!
//! A small line-oriented mini-language for turning free-form CLI output into
//! tabular rows. A template body declares named capture values, then lists
//! anchored rule patterns that fill and emit rows:
//!
//! ```text
//! Value NEIGHBOR (\S+)
//! Value Filldown LOCAL_INTERFACE (\S+)
//!
//! Start
//!   ^Local Intf: ${LOCAL_INTERFACE}
//!   ^System Name: ${NEIGHBOR} -> Record
//! ```
//!
//! Each input line is tested against the rules in order; the first match
//! wins. `${NAME}` interpolates a value's pattern as a named capture group.
//! `-> Record` emits the current row and clears everything not declared
//! `Filldown`. A partially filled row left at end of input is emitted.
//!
//! The engine treats this crate as a black box: compile a body, run it over
//! raw text, read back a header row plus data rows.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod template;

pub use error::GrammarError;
pub use template::{GrammarTemplate, Table};
