//! Phoneme category tables
//!
//! A category maps a symbol (usually one character, e.g. `C` or `V`) to an
//! ordered list of interchangeable phoneme tokens. Tokens may span several
//! characters (`gh`, `ts'`). Tables are loaded from TOML so inventories can be
//! swapped without recompilation.

use crate::error::{LacunaError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Mapping from category symbol to its ordered token list
///
/// # Example
/// ```
/// use lacuna::category::CategoryTable;
///
/// let table = CategoryTable::from_entries([("V", vec!["a", "e"]), ("C", vec!["t", "gh"])])?;
/// assert!(table.is_category_symbol('V'));
/// assert!(!table.is_category_symbol('x'));
/// assert_eq!(table.get("C"), Some(&["t".to_string(), "gh".to_string()][..]));
/// # Ok::<(), lacuna::error::LacunaError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: BTreeMap<String, Vec<String>>,
}

/// Token list as written in a category file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenSpec {
    /// `"b,d,dz"`
    Delimited(String),
    /// `["b", "d", "dz"]`
    List(Vec<String>),
}

impl TokenSpec {
    fn into_tokens(self) -> Vec<String> {
        match self {
            TokenSpec::Delimited(s) => s
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            TokenSpec::List(tokens) => tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryFile {
    categories: BTreeMap<String, TokenSpec>,
}

impl CategoryTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(symbol, tokens)` pairs
    ///
    /// # Errors
    /// Fails if a symbol or any token is empty.
    pub fn from_entries<I, S, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut table = Self::new();
        for (symbol, tokens) in entries {
            table.insert(symbol, tokens.into_iter().map(Into::into).collect())?;
        }
        Ok(table)
    }

    /// Add or replace a category
    ///
    /// An empty token list is accepted; expanding such a category is a no-op.
    pub fn insert(&mut self, symbol: impl Into<String>, tokens: Vec<String>) -> Result<()> {
        let symbol = symbol.into();
        if symbol.is_empty() {
            return Err(LacunaError::EmptySymbol);
        }
        if tokens.iter().any(String::is_empty) {
            return Err(LacunaError::EmptyToken { symbol });
        }
        self.categories.insert(symbol, tokens);
        Ok(())
    }

    /// Parse a table from TOML text
    ///
    /// # Example TOML
    /// ```toml
    /// [categories]
    /// C = "b,d,dz,g"
    /// V = ["a", "e", "i"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CategoryFile =
            toml::from_str(content).map_err(|e| LacunaError::CategoryConfig(e.to_string()))?;

        let mut table = Self::new();
        for (symbol, spec) in file.categories {
            table.insert(symbol, spec.into_tokens())?;
        }
        Ok(table)
    }

    /// Load a table from a TOML file
    pub fn from_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!("Failed to read categories file: {}", path.as_ref().display())
        })?;

        Self::from_toml_str(&content).with_context(|| {
            format!(
                "Failed to parse category definitions in {}",
                path.as_ref().display()
            )
        })
    }

    /// Embedded default inventory (Old Mtsqrveli consonants `C` and vowels `V`)
    pub fn default_inventory() -> Result<Self> {
        const DEFAULT_TOML: &str = include_str!("../categories-default.toml");
        Self::from_toml_str(DEFAULT_TOML)
    }

    /// Token list for a symbol
    pub fn get(&self, symbol: &str) -> Option<&[String]> {
        self.categories.get(symbol).map(Vec::as_slice)
    }

    /// Whether `ch` names a category
    ///
    /// This is the single category-vs-literal decision used by expansion.
    pub fn is_category_symbol(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.categories.contains_key(&*ch.encode_utf8(&mut buf))
    }

    /// Tokens for a single-character symbol
    pub fn tokens_for(&self, ch: char) -> Option<&[String]> {
        let mut buf = [0u8; 4];
        self.get(ch.encode_utf8(&mut buf))
    }

    /// Whether any category symbol occurs in `pattern`
    ///
    /// Single-character symbols go through [`Self::is_category_symbol`];
    /// multi-character symbols match as substrings. Empty pattern is `false`.
    pub fn has_categories(&self, pattern: &str) -> bool {
        pattern.chars().any(|ch| self.is_category_symbol(ch))
            || self.multi_char_symbols().any(|symbol| pattern.contains(symbol))
    }

    /// Symbols longer than one character, longest first
    pub fn multi_char_symbols(&self) -> impl Iterator<Item = &str> {
        let mut symbols: Vec<&str> = self
            .categories
            .keys()
            .map(String::as_str)
            .filter(|s| s.chars().count() > 1)
            .collect();
        symbols.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        symbols.into_iter()
    }

    /// All `(symbol, tokens)` pairs in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(symbol, tokens)| (symbol.as_str(), tokens.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
