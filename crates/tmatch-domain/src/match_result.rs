//! MatchResult - the outcome of one matching request

use crate::record::ParsedRecord;
use crate::template::TemplateId;
use serde::{Deserialize, Serialize};

/// Winning template, its extracted records, and its fitness score
///
/// A request where every candidate failed evaluation or scored 0 yields the
/// [`MatchResult::no_match`] sentinel rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Id of the winning template, or `None` when nothing matched
    pub template_id: Option<TemplateId>,

    /// Records extracted by the winning template, in row order
    pub records: Vec<ParsedRecord>,

    /// Fitness score of the winner; 0.0 when nothing matched
    pub score: f64,
}

impl MatchResult {
    /// The sentinel returned when no candidate scored above zero
    pub fn no_match() -> Self {
        Self {
            template_id: None,
            records: Vec::new(),
            score: 0.0,
        }
    }

    /// Whether a template was selected
    pub fn is_match(&self) -> bool {
        self.template_id.is_some()
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::no_match()
    }
}
