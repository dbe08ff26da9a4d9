//! Best-match selection - orchestrates filter, evaluate, and score

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::evaluator::evaluate;
use std::fmt::Display;
use tmatch_domain::{filter_terms, score_candidate, MatchResult, TemplateCatalog};
use tracing::{debug, info, warn};

/// The best-match selector
///
/// Stateless apart from configuration; one instance can serve any number of
/// sequential requests. Callers on separate workers each hold their own
/// catalog handle, so concurrent use needs no locking here.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: EngineConfig,
}

impl Matcher {
    /// Create a matcher with the given configuration
    ///
    /// Rejects weight tables that fail [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;
        Ok(Self { config })
    }

    /// Find the best-fitting template for one raw capture
    ///
    /// Decomposes the advisory `filter` into search terms, queries the
    /// catalog, then evaluates and scores every candidate in store order.
    /// The strict maximum wins, so ties resolve to the candidate seen
    /// first. Candidates that fail evaluation are logged and skipped;
    /// candidates producing no records are never scored. If nothing scores
    /// above zero the no-match sentinel comes back.
    ///
    /// Only a catalog failure aborts the request.
    pub fn find_best<C>(
        &self,
        catalog: &C,
        raw: &str,
        filter: Option<&str>,
    ) -> Result<MatchResult, EngineError>
    where
        C: TemplateCatalog,
        C::Error: Display,
    {
        let terms = filter_terms(filter);
        debug!(?terms, raw_len = raw.len(), "matching request");

        let candidates = catalog
            .query(&terms)
            .map_err(|e| EngineError::StoreUnavailable(e.to_string()))?;
        info!(candidates = candidates.len(), "evaluating candidates");

        let mut best = MatchResult::no_match();
        for template in candidates {
            let records = match evaluate(&template, raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(template = %template.id, error = %e, "evaluation failed, skipping");
                    continue;
                }
            };
            if records.is_empty() {
                debug!(template = %template.id, "no records extracted");
                continue;
            }

            let score = score_candidate(&template.command, &records, raw, &self.config.score);
            debug!(template = %template.id, score, records = records.len(), "scored candidate");

            if score > best.score {
                best = MatchResult {
                    template_id: Some(template.id),
                    records,
                    score,
                };
            }
        }

        match &best.template_id {
            Some(id) => info!(template = %id, score = best.score, "selected template"),
            None => info!("no template matched"),
        }
        Ok(best)
    }
}
