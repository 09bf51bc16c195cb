//! JSON output format for pattern statistics and holes
//!
//! Statistics are an object keyed by instantiation string with
//! `{count, probability, actualExpectedRatio, phonemes}` values.

use crate::holes::HoleReport;
use crate::stats::{FrequencySummary, PatternStats};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Statistics for one instantiation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonFrequencyRecord {
    /// Raw occurrences in the lexicon
    pub count: u64,
    /// count / word count, at most 1.0
    pub probability: f64,
    /// probability / mean probability (0.0 if the mean is 0)
    pub actual_expected_ratio: f64,
    /// Token sequence
    pub phonemes: Vec<String>,
}

/// Aggregates across all instantiations of the pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonSummary {
    pub instantiations: usize,
    pub word_count: usize,
    pub total_count: u64,
    pub frequency_mean: f64,
    pub frequency_std_dev: f64,
    pub probability_mean: f64,
    pub probability_std_dev: f64,
}

impl JsonSummary {
    fn from_summary(instantiations: usize, summary: &FrequencySummary) -> Self {
        Self {
            instantiations,
            word_count: summary.word_count,
            total_count: summary.total_count,
            frequency_mean: summary.frequency_mean,
            frequency_std_dev: summary.frequency_std_dev,
            probability_mean: summary.probability_mean,
            probability_std_dev: summary.probability_std_dev,
        }
    }
}

/// A hole with the counts behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonHoleReport {
    pub instantiation: String,
    pub phonemes: Vec<String>,
    pub prefix: String,
    pub prefix_count: u64,
    pub suffix: String,
    pub suffix_count: u64,
    pub count: u64,
}

impl From<&HoleReport> for JsonHoleReport {
    fn from(report: &HoleReport) -> Self {
        Self {
            instantiation: report.instantiation.clone(),
            phonemes: report.phonemes.clone(),
            prefix: report.prefix.clone(),
            prefix_count: report.prefix_count,
            suffix: report.suffix.clone(),
            suffix_count: report.suffix_count,
            count: report.count,
        }
    }
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Pattern analyzed
    pub pattern: String,
    /// Summary statistics (present with --summary)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<JsonSummary>,
    /// Per-instantiation statistics keyed by instantiation string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<BTreeMap<String, JsonFrequencyRecord>>,
    /// Flagged holes in expansion order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holes: Option<Vec<String>>,
    /// Hole details (if counts requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole_reports: Option<Vec<JsonHoleReport>>,
}

impl JsonOutput {
    /// Create a new JSON output structure
    pub fn new(pattern: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "lacuna-json-v1".to_string(),
            pattern: pattern.to_string(),
            summary: None,
            statistics: None,
            holes: None,
            hole_reports: None,
        }
    }

    /// Set per-instantiation statistics
    pub fn set_statistics(&mut self, stats: &PatternStats) {
        let statistics = stats
            .records()
            .iter()
            .map(|r| {
                (
                    r.instantiation.clone(),
                    JsonFrequencyRecord {
                        count: r.count,
                        probability: r.probability,
                        actual_expected_ratio: r.actual_expected_ratio,
                        phonemes: r.phonemes.clone(),
                    },
                )
            })
            .collect();

        self.summary = stats
            .summary()
            .map(|s| JsonSummary::from_summary(stats.len(), s));
        self.statistics = Some(statistics);
    }

    /// Set detected holes
    pub fn set_holes(&mut self, reports: &[HoleReport], include_counts: bool) {
        self.holes = Some(reports.iter().map(|r| r.instantiation.clone()).collect());
        self.hole_reports = if include_counts {
            Some(reports.iter().map(JsonHoleReport::from).collect())
        } else {
            None
        };
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategoryTable;
    use crate::holes::{find_hole_reports, HoleCriteria};

    fn ab_table() -> CategoryTable {
        CategoryTable::from_entries([("A", vec!["a1", "a2", "a3"]), ("B", vec!["b1", "b2"])])
            .unwrap()
    }

    const LEXICON: &str = "a1 b1 a1a2b1 a1a3b3 a1b1b2b1 a2a2";

    #[test]
    fn test_json_output_creation() {
        let output = JsonOutput::new("VCC");
        assert_eq!(output.format, "lacuna-json-v1");
        assert_eq!(output.pattern, "VCC");
        assert!(output.statistics.is_none());
        assert!(output.holes.is_none());
    }

    #[test]
    fn test_statistics_serialization() {
        let stats = PatternStats::analyze("A", LEXICON, &ab_table()).unwrap();
        let mut output = JsonOutput::new("A");
        output.set_statistics(&stats);

        let json = output.to_json().unwrap();
        assert!(json.contains("\"actualExpectedRatio\""));
        assert!(json.contains("\"wordCount\": 6"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["statistics"]["a1"]["count"], 4);
        assert_eq!(value["statistics"]["a3"]["phonemes"][0], "a3");
        assert!(value.get("holes").is_none());
    }

    #[test]
    fn test_holes_serialization() {
        let reports =
            find_hole_reports("AAA", LEXICON, &ab_table(), &HoleCriteria::default()).unwrap();
        let mut output = JsonOutput::new("AAA");
        output.set_holes(&reports, false);

        let json = output.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["holes"][0], "a1a2a2");
        // Optional None fields should be omitted
        assert!(!json.contains("holeReports"));
        assert!(!json.contains("statistics"));
    }

    #[test]
    fn test_hole_reports_included_on_request() {
        let reports =
            find_hole_reports("AAA", LEXICON, &ab_table(), &HoleCriteria::default()).unwrap();
        let mut output = JsonOutput::new("AAA");
        output.set_holes(&reports, true);

        let round: JsonOutput = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        let details = round.hole_reports.unwrap();
        assert_eq!(details.len(), reports.len());
        assert_eq!(details[0].prefix, "a1a2");
        assert_eq!(details[0].suffix_count, 1);
    }
}
