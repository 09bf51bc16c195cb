use crate::category::CategoryTable;
use crate::pattern::PhonemeSequence;

/// Cartesian product of partial sequences with a category's tokens
///
/// Degenerate cases, checked in order:
/// - both empty: empty result
/// - no sequences: each token becomes a one-token sequence (seeds the first group)
/// - no tokens: `sequences` returned unchanged
///
/// Otherwise every sequence is extended by every token, sequence order outer
/// and token order inner.
///
/// # Example
/// ```
/// use lacuna::pattern::multiply;
///
/// let seqs = vec![vec!["a".to_string()], vec!["b".to_string()]];
/// let out = multiply(seqs, &["1".to_string(), "2".to_string()]);
///
/// assert_eq!(out.len(), 4);
/// assert_eq!(out[0], vec!["a", "1"]);
/// assert_eq!(out[1], vec!["a", "2"]);
/// assert_eq!(out[2], vec!["b", "1"]);
/// ```
pub fn multiply(sequences: Vec<PhonemeSequence>, tokens: &[String]) -> Vec<PhonemeSequence> {
    match (sequences.is_empty(), tokens.is_empty()) {
        (true, true) => Vec::new(),
        (true, false) => tokens.iter().map(|t| vec![t.clone()]).collect(),
        (false, true) => sequences,
        (false, false) => {
            let mut product = Vec::with_capacity(sequences.len() * tokens.len());
            for sequence in &sequences {
                for token in tokens {
                    let mut extended = Vec::with_capacity(sequence.len() + 1);
                    extended.extend_from_slice(sequence);
                    extended.push(token.clone());
                    product.push(extended);
                }
            }
            product
        }
    }
}

/// Whether `ch` is a category symbol in `categories`
pub fn is_category_symbol(ch: char, categories: &CategoryTable) -> bool {
    categories.is_category_symbol(ch)
}

/// Whether any category symbol appears in `pattern` (empty pattern: `false`)
pub fn has_categories(pattern: &str, categories: &CategoryTable) -> bool {
    categories.has_categories(pattern)
}

/// Expand a pattern into every phoneme sequence it denotes
///
/// Category symbols branch over their tokens; every other character is
/// appended as a literal one-character token. A pattern without categories
/// (including `""`) yields exactly one sequence.
///
/// # Example
/// ```
/// use lacuna::category::CategoryTable;
/// use lacuna::pattern::expand;
///
/// let table = CategoryTable::from_entries([("V", vec!["a", "e"])])?;
/// let sequences = expand("tV", &table);
///
/// assert_eq!(sequences, vec![vec!["t", "a"], vec!["t", "e"]]);
/// # Ok::<(), lacuna::error::LacunaError>(())
/// ```
pub fn expand(pattern: &str, categories: &CategoryTable) -> Vec<PhonemeSequence> {
    if !has_categories(pattern, categories) {
        return vec![pattern.chars().map(String::from).collect()];
    }

    let mut sequences: Vec<PhonemeSequence> = vec![Vec::new()];

    for ch in pattern.chars() {
        match categories.tokens_for(ch) {
            Some(tokens) => {
                if tokens.is_empty() {
                    tracing::warn!(
                        "Category '{}' has no tokens; it contributes nothing to pattern '{}'",
                        ch,
                        pattern
                    );
                }
                sequences = multiply(sequences, tokens);
            }
            None => {
                for sequence in &mut sequences {
                    sequence.push(ch.to_string());
                }
            }
        }
    }

    tracing::debug!(
        pattern,
        instantiations = sequences.len(),
        "expanded pattern"
    );

    sequences
}

/// Concatenate a sequence's tokens into its instantiation string
pub fn join_sequence(sequence: &[String]) -> String {
    sequence.concat()
}
