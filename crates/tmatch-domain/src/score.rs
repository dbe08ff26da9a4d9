//! Scoring module - the multi-factor template fitness formula
//!
//! Assigns a bounded (roughly 0-100, not a probability) fitness score to one
//! (template, records, raw capture) triple as the sum of four independently
//! weighted terms plus a vocabulary bonus. The default weights are a
//! score-compatibility contract across versions; [`ScoreConfig`] makes the
//! table tunable without changing the defaults.

use crate::record::ParsedRecord;
use serde::{Deserialize, Serialize};

/// Cap for the record-count term
pub const RECORD_COUNT_MAX: f64 = 30.0;

/// Per-record contribution toward the record-count cap
pub const PER_RECORD_WEIGHT: f64 = 10.0;

/// Record-count credit for a one-shot command returning more than one record
pub const ONE_SHOT_PARTIAL: f64 = 15.0;

/// Cap for the field-population term
pub const FIELD_POPULATION_MAX: f64 = 25.0;

/// Cap for the line-coverage term
pub const COVERAGE_MAX: f64 = 20.0;

/// Specificity credit for commands containing "version"
pub const SPECIFICITY_VERSION: f64 = 15.0;

/// Specificity credit for commands containing "system"
pub const SPECIFICITY_SYSTEM: f64 = 12.0;

/// Specificity credit for commands containing "show"
pub const SPECIFICITY_SHOW: f64 = 8.0;

/// Bonus when the raw capture mentions known vendor/OS vocabulary
pub const VOCABULARY_BONUS: f64 = 10.0;

/// Fixed vocabulary checked against the lowercased raw capture
const VOCABULARY_KEYWORDS: &[&str] = &["version", "cisco", "juniper", "arista"];

/// Weight table for the fitness formula
///
/// Defaults reproduce the contract weights exactly; deployments that tune
/// them lose score-compatibility with other instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Cap for the record-count term
    pub record_count_max: f64,
    /// Per-record contribution toward the record-count cap
    pub per_record_weight: f64,
    /// Record-count credit when a one-shot command returns multiple records
    pub one_shot_partial: f64,
    /// Cap for the field-population term
    pub field_population_max: f64,
    /// Cap for the line-coverage term
    pub coverage_max: f64,
    /// Specificity credit for commands containing "version"
    pub specificity_version: f64,
    /// Specificity credit for commands containing "system"
    pub specificity_system: f64,
    /// Specificity credit for commands containing "show"
    pub specificity_show: f64,
    /// Bonus when the raw capture mentions known vendor/OS vocabulary
    pub vocabulary_bonus: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            record_count_max: RECORD_COUNT_MAX,
            per_record_weight: PER_RECORD_WEIGHT,
            one_shot_partial: ONE_SHOT_PARTIAL,
            field_population_max: FIELD_POPULATION_MAX,
            coverage_max: COVERAGE_MAX,
            specificity_version: SPECIFICITY_VERSION,
            specificity_system: SPECIFICITY_SYSTEM,
            specificity_show: SPECIFICITY_SHOW,
            vocabulary_bonus: VOCABULARY_BONUS,
        }
    }
}

impl ScoreConfig {
    /// Largest score the formula can produce under this table
    pub fn max_score(&self) -> f64 {
        self.record_count_max
            + self.field_population_max
            + self.coverage_max
            + self.specificity_version
            + self.vocabulary_bonus
    }
}

/// Compute the fitness score for one evaluated candidate
///
/// Only successfully evaluated candidates are scored; the selector treats
/// evaluation failures as score 0 without calling this function.
pub fn score_candidate(
    command: &str,
    records: &[ParsedRecord],
    raw: &str,
    config: &ScoreConfig,
) -> f64 {
    let command = command.to_lowercase();

    record_count_term(&command, records.len(), config)
        + field_population_term(records, config)
        + coverage_term(records.len(), raw, config)
        + specificity_term(&command, config)
        + vocabulary_bonus(raw, config)
}

/// Record-count term (0-30)
///
/// Commands whose name contains "version" are treated as one-shot: exactly
/// one record is the expected shape and anything else is penalized. All
/// other commands earn credit per record up to the cap.
fn record_count_term(command: &str, n: usize, config: &ScoreConfig) -> f64 {
    if command.contains("version") {
        if n == 1 {
            config.record_count_max
        } else if n > 0 {
            config.one_shot_partial
        } else {
            0.0
        }
    } else {
        (n as f64 * config.per_record_weight).min(config.record_count_max)
    }
}

/// Field-population term (0-25): fraction of non-empty fields in the first
/// record, scaled to the cap
fn field_population_term(records: &[ParsedRecord], config: &ScoreConfig) -> f64 {
    let Some(first) = records.first() else {
        return 0.0;
    };
    if first.is_empty() {
        return 0.0;
    }

    let ratio = first.populated_count() as f64 / first.len() as f64;
    ratio * config.field_population_max
}

/// Coverage term (0-20): records produced per raw-output line, capped at 1.0
fn coverage_term(n: usize, raw: &str, config: &ScoreConfig) -> f64 {
    let lines = raw.lines().count().max(1);
    let coverage_ratio = (n as f64 / lines as f64).min(1.0);
    coverage_ratio * config.coverage_max
}

/// Specificity term (0-15): more specific command names earn more credit
fn specificity_term(command: &str, config: &ScoreConfig) -> f64 {
    if command.contains("version") {
        config.specificity_version
    } else if command.contains("system") {
        config.specificity_system
    } else if command.contains("show") {
        config.specificity_show
    } else {
        0.0
    }
}

/// Vocabulary bonus (0 or 10): raw capture mentions a known vendor or OS
fn vocabulary_bonus(raw: &str, config: &ScoreConfig) -> f64 {
    let raw = raw.to_lowercase();
    if VOCABULARY_KEYWORDS.iter().any(|kw| raw.contains(kw)) {
        config.vocabulary_bonus
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> ParsedRecord {
        let mut r = ParsedRecord::new();
        for (k, v) in fields {
            r.insert(*k, *v);
        }
        r
    }

    #[test]
    fn test_record_count_one_shot_exact() {
        let config = ScoreConfig::default();
        assert_eq!(record_count_term("show version", 1, &config), 30.0);
        assert_eq!(record_count_term("show version", 3, &config), 15.0);
        assert_eq!(record_count_term("show version", 0, &config), 0.0);
    }

    #[test]
    fn test_record_count_scales_then_caps() {
        let config = ScoreConfig::default();
        assert_eq!(record_count_term("show lldp neighbor", 0, &config), 0.0);
        assert_eq!(record_count_term("show lldp neighbor", 2, &config), 20.0);
        assert_eq!(record_count_term("show lldp neighbor", 5, &config), 30.0);
    }

    #[test]
    fn test_field_population_ratio() {
        let config = ScoreConfig::default();
        let records = vec![record(&[("A", "x"), ("B", ""), ("C", "  "), ("D", "y")])];
        // 2 of 4 fields populated after trim
        assert_eq!(field_population_term(&records, &config), 12.5);
    }

    #[test]
    fn test_field_population_empty_cases() {
        let config = ScoreConfig::default();
        assert_eq!(field_population_term(&[], &config), 0.0);
        assert_eq!(field_population_term(&[record(&[])], &config), 0.0);
    }

    #[test]
    fn test_coverage_caps_at_line_count() {
        let config = ScoreConfig::default();
        assert_eq!(coverage_term(2, "a\nb\nc\nd", &config), 10.0);
        assert_eq!(coverage_term(8, "a\nb\nc\nd", &config), 20.0);
    }

    #[test]
    fn test_coverage_empty_raw_counts_one_line() {
        let config = ScoreConfig::default();
        assert_eq!(coverage_term(0, "", &config), 0.0);
        assert_eq!(coverage_term(1, "", &config), 20.0);
    }

    #[test]
    fn test_specificity_priority() {
        let config = ScoreConfig::default();
        assert_eq!(specificity_term("show version", &config), 15.0);
        assert_eq!(specificity_term("show system info", &config), 12.0);
        assert_eq!(specificity_term("show interfaces", &config), 8.0);
        assert_eq!(specificity_term("display arp", &config), 0.0);
    }

    #[test]
    fn test_vocabulary_bonus_case_insensitive() {
        let config = ScoreConfig::default();
        assert_eq!(vocabulary_bonus("CISCO IOS output", &config), 10.0);
        assert_eq!(vocabulary_bonus("plain text", &config), 0.0);
    }

    #[test]
    fn test_full_score_version_one_shot() {
        let config = ScoreConfig::default();
        let raw = "Cisco IOS Software, Version 15.2";
        let records = vec![record(&[("VERSION", "15.2")])];

        let score = score_candidate("cisco_ios_show_version", &records, raw, &config);
        // 30 record-count + 25 population + 20 coverage + 15 specificity + 10 vocab
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_command_comparison_is_case_insensitive() {
        let config = ScoreConfig::default();
        let records = vec![record(&[("VERSION", "1.0")])];
        let upper = score_candidate("SHOW VERSION", &records, "text", &config);
        let lower = score_candidate("show version", &records, "text", &config);
        assert_eq!(upper, lower);
    }
}
