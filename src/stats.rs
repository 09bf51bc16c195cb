//! Pattern frequency statistics
//!
//! For one pattern, every instantiation gets a [`FrequencyRecord`]. A single
//! alternation matcher scans the corpus once, counting non-overlapping
//! occurrences, and the counts are then normalized against the corpus word
//! count.

use crate::category::CategoryTable;
use crate::error::Result;
use crate::pattern::{expand, join_sequence, PhonemeSequence};
use regex::Regex;
use std::collections::HashMap;
use std::fmt::Write as _;

/// Statistics for a single pattern instantiation
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRecord {
    /// Concatenated tokens, the key matched against the corpus
    pub instantiation: String,
    /// Token sequence this instantiation was built from
    pub phonemes: PhonemeSequence,
    /// Raw occurrences in the corpus
    pub count: u64,
    /// `count / word_count`, saturated at 1.0
    pub probability: f64,
    /// `probability / probability_mean`; 0.0 when the mean is 0
    pub actual_expected_ratio: f64,
}

impl FrequencyRecord {
    fn new(phonemes: PhonemeSequence) -> Self {
        Self {
            instantiation: join_sequence(&phonemes),
            phonemes,
            count: 0,
            probability: 0.0,
            actual_expected_ratio: 0.0,
        }
    }
}

/// Aggregate statistics across all instantiations of a pattern
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrequencySummary {
    /// Whitespace-delimited words in the corpus (at least 1)
    pub word_count: usize,
    /// Sum of all instantiation counts
    pub total_count: u64,
    pub frequency_mean: f64,
    pub frequency_std_dev: f64,
    /// Mean probability, saturated at 1.0
    pub probability_mean: f64,
    pub probability_std_dev: f64,
}

/// Frequency analyzer for one pattern
///
/// # Example
/// ```
/// use lacuna::category::CategoryTable;
/// use lacuna::stats::PatternStats;
///
/// let table = CategoryTable::from_entries([("A", vec!["a1", "a2"])])?;
/// let stats = PatternStats::analyze("A", "a1 a1a2 b1", &table)?;
///
/// assert_eq!(stats.count("a1"), 2);
/// assert_eq!(stats.count("a2"), 1);
/// assert_eq!(stats.summary().unwrap().word_count, 3);
/// # Ok::<(), lacuna::error::LacunaError>(())
/// ```
#[derive(Debug)]
pub struct PatternStats {
    pattern: String,
    /// Records in expansion order
    records: Vec<FrequencyRecord>,
    /// Instantiation string -> position in `records`
    index: HashMap<String, usize>,
    /// Longest-first alternation over all non-empty instantiations
    matcher: Option<Regex>,
    summary: Option<FrequencySummary>,
}

impl PatternStats {
    /// Expand `pattern` and prepare zeroed records plus the matcher
    ///
    /// # Errors
    /// Fails only if the alternation cannot be compiled, which happens when
    /// the expansion is too large for the regex size limit.
    pub fn new(pattern: &str, categories: &CategoryTable) -> Result<Self> {
        let mut records: Vec<FrequencyRecord> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for phonemes in expand(pattern, categories) {
            let record = FrequencyRecord::new(phonemes);
            match index.get(&record.instantiation) {
                Some(&existing) => {
                    tracing::debug!(
                        "Duplicate instantiation '{}' in pattern '{}' overwrites earlier record",
                        record.instantiation,
                        pattern
                    );
                    records[existing] = record;
                }
                None => {
                    index.insert(record.instantiation.clone(), records.len());
                    records.push(record);
                }
            }
        }

        let matcher = build_matcher(records.iter().map(|r| r.instantiation.as_str()))?;
        if matcher.is_none() {
            tracing::warn!(
                "Pattern '{}' has no non-empty instantiations; nothing can match",
                pattern
            );
        }

        Ok(Self {
            pattern: pattern.to_string(),
            records,
            index,
            matcher,
            summary: None,
        })
    }

    /// Construct and immediately run [`Self::calculate_frequencies`]
    pub fn analyze(pattern: &str, corpus: &str, categories: &CategoryTable) -> Result<Self> {
        let mut stats = Self::new(pattern, categories)?;
        stats.calculate_frequencies(corpus);
        Ok(stats)
    }

    /// Count occurrences in `corpus` and derive probabilities
    ///
    /// The scan is forward-only and non-overlapping: after a match the next
    /// attempt starts right after it. At each position the longest
    /// instantiation wins. Counts are reset first, so calling this again with
    /// another corpus replaces the previous results.
    pub fn calculate_frequencies(&mut self, corpus: &str) -> &FrequencySummary {
        for record in &mut self.records {
            record.count = 0;
        }

        if let Some(matcher) = &self.matcher {
            for found in matcher.find_iter(corpus) {
                if let Some(&i) = self.index.get(found.as_str()) {
                    self.records[i].count += 1;
                }
            }
        }

        // An empty corpus still counts as one (empty) word
        let word_count = word_count(corpus).max(1);

        for record in &mut self.records {
            record.probability = (record.count as f64 / word_count as f64).min(1.0);
        }

        let counts: Vec<f64> = self.records.iter().map(|r| r.count as f64).collect();
        let probabilities: Vec<f64> = self.records.iter().map(|r| r.probability).collect();

        let frequency_mean = mean(&counts);
        let probability_mean = mean(&probabilities).min(1.0);

        for record in &mut self.records {
            record.actual_expected_ratio = if probability_mean > 0.0 {
                record.probability / probability_mean
            } else {
                0.0
            };
        }

        let summary = FrequencySummary {
            word_count,
            total_count: self.records.iter().map(|r| r.count).sum(),
            frequency_mean,
            frequency_std_dev: std_dev(&counts, frequency_mean),
            probability_mean,
            probability_std_dev: std_dev(&probabilities, probability_mean),
        };

        tracing::debug!(
            pattern = %self.pattern,
            instantiations = self.records.len(),
            total_count = summary.total_count,
            word_count,
            "calculated frequencies"
        );

        self.summary.insert(summary)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Records in expansion order
    pub fn records(&self) -> &[FrequencyRecord] {
        &self.records
    }

    pub fn get(&self, instantiation: &str) -> Option<&FrequencyRecord> {
        self.index.get(instantiation).map(|&i| &self.records[i])
    }

    /// Count for an instantiation, 0 if the pattern does not produce it
    pub fn count(&self, instantiation: &str) -> u64 {
        self.get(instantiation).map_or(0, |r| r.count)
    }

    /// Aggregates from the last frequency pass (None before the first)
    pub fn summary(&self) -> Option<&FrequencySummary> {
        self.summary.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Human-readable table, most frequent first
    ///
    /// `top` limits the number of rows.
    pub fn to_report_string(&self, top: Option<usize>) -> String {
        let mut out = String::new();

        if self.records.is_empty() {
            let _ = writeln!(out, "No instantiations for pattern '{}'.", self.pattern);
            return out;
        }

        let _ = writeln!(out, "=== Pattern '{}' ===", self.pattern);
        let _ = writeln!(out, "    count  probability      ratio instantiation");
        let _ = writeln!(out, "--------- ------------ ---------- ----------------");

        let sorted = sorted_by_count(&self.records);
        let limit = top.unwrap_or(sorted.len());
        for record in sorted.into_iter().take(limit) {
            let _ = writeln!(
                out,
                "{:>9} {:>12.6} {:>10.4} {} [{}]",
                record.count,
                record.probability,
                record.actual_expected_ratio,
                record.instantiation,
                record.phonemes.join(" ")
            );
        }

        let _ = writeln!(out, "--------- ------------ ---------- ----------------");
        if let Some(summary) = &self.summary {
            let _ = writeln!(
                out,
                "{:>9} {:>12.6} {:>10} total ({} instantiations, {} words)",
                summary.total_count,
                summary.probability_mean,
                "",
                self.records.len(),
                summary.word_count
            );
            let _ = writeln!(
                out,
                "Std Dev: count {:.4}, probability {:.6}",
                summary.frequency_std_dev, summary.probability_std_dev
            );
        }

        out
    }
}

/// Number of whitespace-delimited words
pub fn word_count(corpus: &str) -> usize {
    corpus.split_whitespace().count()
}

/// Records ordered by descending count; ties keep their original order
pub fn sorted_by_count(records: &[FrequencyRecord]) -> Vec<&FrequencyRecord> {
    let mut sorted: Vec<&FrequencyRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted
}

/// Alternation over literal strings, longest first
///
/// Regex alternation is leftmost-first, so "ag|agh" would never report
/// "agh". Sorting by descending length makes the longest literal win at
/// every position. Empty strings are skipped since they match everywhere.
fn build_matcher<'a>(instantiations: impl Iterator<Item = &'a str>) -> Result<Option<Regex>> {
    let mut alternatives: Vec<&str> = instantiations.filter(|s| !s.is_empty()).collect();
    if alternatives.is_empty() {
        return Ok(None);
    }

    alternatives.sort_by(|a, b| b.len().cmp(&a.len()));

    let source = alternatives
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");

    tracing::debug!(alternatives = alternatives.len(), "built alternation matcher");

    Ok(Some(Regex::new(&source)?))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a known mean
fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
