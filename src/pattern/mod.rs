// Category-Pattern Expansion
//
// A pattern such as "VCC" names a family of phoneme sequences: every way of
// picking one token from each referenced category, in pattern order. Literal
// characters pass through as one-character tokens without branching.
//
// Cost model: the number of instantiations is the product of the category
// sizes at the category positions of the pattern ("VCC" over 6 vowels and 29
// consonants is 6 * 29 * 29 = 5046). This product, not corpus size, dominates
// both expansion and matcher construction.
//
// Two grammars share the same Cartesian-product primitive (`multiply`):
// - primary: single-character category symbols scanned left to right
// - composite: bracket groups `[x,y]` and multi-character category names

mod composite;
mod expand;

pub use composite::{expand_composite, split_top_level};
pub use expand::{expand, has_categories, is_category_symbol, join_sequence, multiply};

/// One concrete instantiation of a pattern: one token per pattern position
pub type PhonemeSequence = Vec<String>;
