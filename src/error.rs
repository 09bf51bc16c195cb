//! Error types for pattern expansion, frequency analysis and hole detection

use thiserror::Error;

/// Errors raised by the analysis engine
#[derive(Error, Debug)]
pub enum LacunaError {
    #[error("Category '{symbol}' contains an empty token")]
    EmptyToken { symbol: String },

    #[error("Category symbol must not be empty")]
    EmptySymbol,

    #[error("Failed to build alternation matcher: {0}")]
    Matcher(#[from] regex::Error),

    #[error("Pattern '{pattern}' is too short: need at least {min} positions")]
    PatternTooShort { pattern: String, min: usize },

    #[error("Invalid hole criteria: {0}")]
    InvalidCriteria(String),

    #[error("Invalid category configuration: {0}")]
    CategoryConfig(String),
}

pub type Result<T> = std::result::Result<T, LacunaError>;
