//! Composite pattern grammar: bracket groups and multi-character categories
//!
//! `a[b,c]d` denotes `abd` and `acd`. A multi-character category name such as
//! `Nas` is first rewritten to its bracketed token list (`[m,n]`), so
//! `aNas` behaves like `a[m,n]`. Groups are combined with [`multiply`], left
//! group varying slowest. Spaces are ignored. An empty alternative (`[a,]`)
//! makes a group optional.

use crate::category::CategoryTable;
use crate::pattern::expand::{expand, join_sequence, multiply};
use crate::pattern::PhonemeSequence;

/// Split on commas that are not nested inside brackets
///
/// ```
/// use lacuna::pattern::split_top_level;
///
/// assert_eq!(split_top_level("a,[b,c],d"), vec!["a", "[b,c]", "d"]);
/// assert_eq!(split_top_level(""), vec![""]);
/// ```
pub fn split_top_level(input: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in input.chars() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    parts.push(current);

    parts
}

/// Rewrite multi-character category names as bracket groups, longest name first
fn substitute_multi_char_categories(pattern: &str, categories: &CategoryTable) -> String {
    let mut output = pattern.to_string();
    for symbol in categories.multi_char_symbols() {
        if output.contains(symbol) {
            let tokens = categories.get(symbol).unwrap_or_default();
            output = output.replace(symbol, &format!("[{}]", tokens.join(",")));
        }
    }
    output
}

/// Cut a pattern into top-level segments: text outside brackets and the
/// contents of each outermost bracket pair
fn top_level_segments(pattern: &str) -> Vec<String> {
    let mut segments = vec![String::new()];
    let mut depth = 0usize;

    for ch in pattern.chars() {
        match ch {
            '[' => {
                depth += 1;
                if depth == 1 {
                    segments.push(String::new());
                    continue;
                }
            }
            ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    segments.push(String::new());
                    continue;
                }
            }
            ' ' => continue,
            _ => {}
        }
        if let Some(last) = segments.last_mut() {
            last.push(ch);
        }
    }

    segments.retain(|s| !s.is_empty());
    segments
}

/// Alternatives of one segment as concrete strings
fn segment_alternatives(segment: &str, categories: &CategoryTable) -> Vec<String> {
    let mut alternatives = Vec::new();
    for alternative in split_top_level(segment) {
        if alternative.contains('[') {
            alternatives.extend(
                expand_composite(&alternative, categories)
                    .iter()
                    .map(|s| join_sequence(s)),
            );
        } else {
            alternatives.extend(
                expand(&alternative, categories)
                    .iter()
                    .map(|s| join_sequence(s)),
            );
        }
    }
    alternatives
}

/// Expand a composite pattern into one token per top-level segment
///
/// Falls back to the primary grammar ([`expand`]) when the pattern contains
/// neither brackets nor multi-character category names.
///
/// # Example
/// ```
/// use lacuna::category::CategoryTable;
/// use lacuna::pattern::{expand_composite, join_sequence};
///
/// let table = CategoryTable::from_entries([("Nas", vec!["m", "n"])])?;
/// let strings: Vec<String> = expand_composite("[a,o]Nas", &table)
///     .iter()
///     .map(|s| join_sequence(s))
///     .collect();
///
/// assert_eq!(strings, vec!["am", "an", "om", "on"]);
/// # Ok::<(), lacuna::error::LacunaError>(())
/// ```
pub fn expand_composite(pattern: &str, categories: &CategoryTable) -> Vec<PhonemeSequence> {
    let substituted = substitute_multi_char_categories(pattern, categories);
    if !substituted.contains('[') {
        return expand(&substituted, categories);
    }

    let sequences = top_level_segments(&substituted)
        .iter()
        .map(|segment| segment_alternatives(segment, categories))
        .fold(Vec::new(), |acc, tokens| multiply(acc, &tokens));

    tracing::debug!(
        pattern,
        rewritten = %substituted,
        instantiations = sequences.len(),
        "expanded composite pattern"
    );

    sequences
}
