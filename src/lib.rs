//! Lacuna - phonotactic hole finder
//!
//! This library expands category patterns (e.g. `VCC` over vowel and
//! consonant inventories) into every concrete phoneme sequence, counts each
//! sequence in a lexicon, and flags sequences whose overlapping parts occur
//! while the whole never does.

pub mod category;
pub mod cli;
pub mod error;
pub mod holes;
pub mod json_output;
pub mod pattern;
pub mod stats;
