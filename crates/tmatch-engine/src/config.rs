//! Configuration for the matching engine

use serde::{Deserialize, Serialize};
use tmatch_domain::ScoreConfig;

/// Configuration for the matching engine
///
/// Currently just the scoring weight table; defaults preserve the
/// score-compatibility contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Weight table for the fitness formula
    pub score: ScoreConfig,
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("record_count_max", self.score.record_count_max),
            ("per_record_weight", self.score.per_record_weight),
            ("one_shot_partial", self.score.one_shot_partial),
            ("field_population_max", self.score.field_population_max),
            ("coverage_max", self.score.coverage_max),
            ("specificity_version", self.score.specificity_version),
            ("specificity_system", self.score.specificity_system),
            ("specificity_show", self.score.specificity_show),
            ("vocabulary_bonus", self.score.vocabulary_bonus),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative finite number", name));
            }
        }
        if self.score.one_shot_partial > self.score.record_count_max {
            return Err("one_shot_partial cannot exceed record_count_max".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
