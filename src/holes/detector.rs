use crate::category::CategoryTable;
use crate::error::{LacunaError, Result};
use crate::holes::HoleCriteria;
use crate::pattern::PhonemeSequence;
use crate::stats::PatternStats;

/// Minimum pattern positions for a prefix/suffix join
const MIN_PATTERN_POSITIONS: usize = 2;

/// A flagged instantiation with the counts that flagged it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleReport {
    /// The unattested instantiation string
    pub instantiation: String,
    /// Its token sequence
    pub phonemes: PhonemeSequence,
    /// All tokens but the last, concatenated
    pub prefix: String,
    /// All tokens but the first, concatenated
    pub suffix: String,
    pub prefix_count: u64,
    pub suffix_count: u64,
    /// Occurrences of the whole instantiation
    pub count: u64,
}

impl HoleReport {
    /// Format report as human-readable string
    pub fn to_report_string(&self) -> String {
        format!(
            "HOLE: {} [{}]\n  {}: {} occurrences\n  {}: {} occurrences\n  whole: {} occurrences",
            self.instantiation,
            self.phonemes.join(" "),
            self.prefix,
            self.prefix_count,
            self.suffix,
            self.suffix_count,
            self.count
        )
    }
}

/// Split a pattern into its overlapping sub-patterns
///
/// Prefix drops the last position, suffix drops the first: "ABC" gives
/// ("AB", "BC").
///
/// # Errors
/// Patterns with fewer than two positions have no overlapping parts.
pub fn sub_patterns(pattern: &str) -> Result<(String, String)> {
    let positions = pattern.chars().count();
    if positions < MIN_PATTERN_POSITIONS {
        return Err(LacunaError::PatternTooShort {
            pattern: pattern.to_string(),
            min: MIN_PATTERN_POSITIONS,
        });
    }

    let prefix = pattern.chars().take(positions - 1).collect();
    let suffix = pattern.chars().skip(1).collect();
    Ok((prefix, suffix))
}

/// Find holes and report the counts behind each one
///
/// Runs three frequency passes over `corpus` (whole pattern, prefix, suffix)
/// and joins them per instantiation of the whole pattern. Output follows
/// expansion order.
pub fn find_hole_reports(
    pattern: &str,
    corpus: &str,
    categories: &CategoryTable,
    criteria: &HoleCriteria,
) -> Result<Vec<HoleReport>> {
    criteria.validate()?;
    let (prefix_pattern, suffix_pattern) = sub_patterns(pattern)?;

    let whole = PatternStats::analyze(pattern, corpus, categories)?;
    let top = PatternStats::analyze(&prefix_pattern, corpus, categories)?;
    let bottom = PatternStats::analyze(&suffix_pattern, corpus, categories)?;

    let mut holes = Vec::new();

    for record in whole.records() {
        let (Some((_, init)), Some((_, tail))) =
            (record.phonemes.split_last(), record.phonemes.split_first())
        else {
            continue;
        };

        let prefix = init.concat();
        let suffix = tail.concat();
        let prefix_count = top.count(&prefix);
        let suffix_count = bottom.count(&suffix);

        tracing::debug!(
            "whole start end:\t{}\t{}\t{}\t|\t{}\t{}\t{}",
            record.instantiation,
            prefix,
            suffix,
            record.count,
            prefix_count,
            suffix_count
        );

        if criteria.is_hole(prefix_count, suffix_count, record.count) {
            holes.push(HoleReport {
                instantiation: record.instantiation.clone(),
                phonemes: record.phonemes.clone(),
                prefix,
                suffix,
                prefix_count,
                suffix_count,
                count: record.count,
            });
        }
    }

    tracing::debug!(
        pattern,
        candidates = whole.len(),
        holes = holes.len(),
        "hole detection finished"
    );

    Ok(holes)
}

/// Instantiations of `pattern` whose prefix and suffix occur in `corpus`
/// while the whole never does
///
/// # Example
/// ```
/// use lacuna::category::CategoryTable;
/// use lacuna::holes::find_holes;
///
/// let table = CategoryTable::from_entries([("A", vec!["a1", "a2", "a3"]), ("B", vec!["b1", "b2"])])?;
/// let lexicon = "a1 b1 a1a2b1 a1a3b3 a1b1b2b1 a2a2";
///
/// assert!(!find_holes("AAA", lexicon, &table)?.is_empty());
/// assert!(find_holes("BBB", lexicon, &table)?.is_empty());
/// # Ok::<(), lacuna::error::LacunaError>(())
/// ```
pub fn find_holes(pattern: &str, corpus: &str, categories: &CategoryTable) -> Result<Vec<String>> {
    let reports = find_hole_reports(pattern, corpus, categories, &HoleCriteria::default())?;
    Ok(reports.into_iter().map(|r| r.instantiation).collect())
}
