//! Template evaluation - running one grammar against one raw capture

use crate::error::EvalError;
use tmatch_domain::{ParsedRecord, Template};
use tmatch_grammar::GrammarTemplate;
use tracing::debug;

/// Evaluate one template against a raw capture
///
/// Compiles the template body, runs it over the text, and zips the
/// runtime's header row to each data row in row order. A compile failure is
/// an [`EvalError`]; callers treat it as "zero records, continue" so one
/// malformed template never aborts a search.
pub fn evaluate(template: &Template, raw: &str) -> Result<Vec<ParsedRecord>, EvalError> {
    let grammar = GrammarTemplate::compile(&template.body)?;
    let table = grammar.parse(raw);

    let records: Vec<ParsedRecord> = table
        .rows
        .iter()
        .map(|row| ParsedRecord::from_header(&table.header, row))
        .collect();

    debug!(
        template = %template.id,
        fields = table.header.len(),
        records = records.len(),
        "evaluated template"
    );

    Ok(records)
}
