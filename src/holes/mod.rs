// Phonotactic Hole Detection
//
// Given a pattern such as "VCC", an instantiation is a hole when its
// overlapping sub-sequences (the "VC" prefix and the "CC" suffix) both occur
// in the lexicon while the full sequence does not. This is the same
// sequence-grammar idea as n-gram anomaly mining: the language licenses each
// transition, yet the combination is missing.
//
// The detector is a three-way join over independent frequency passes
// (whole, prefix, suffix) and has no failure modes of its own beyond
// malformed input.

mod config;
mod detector;

pub use config::HoleCriteria;
pub use detector::{find_hole_reports, find_holes, sub_patterns, HoleReport};
