use std::collections::HashSet;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::consts::{STOP_WORDS, SYMBOL_PATTERN};
use crate::errors::MineError;

/// Recognizes gene names in free text.
pub trait GeneEntityExtractor {
    /// Gene names in order of first appearance, without duplicates.
    fn extract(&self, text: &str) -> Vec<String>;
}

///
/// Pattern-based gene symbol recognizer.
///
/// Matches uppercase alphanumeric tokens shaped like HGNC symbols and drops common
/// clinical abbreviations. When a set of known symbols is supplied, only those are
/// reported.
///
pub struct SymbolPatternExtractor {
    pattern: Regex,
    stop_words: HashSet<String>,
    known: Option<HashSet<String>>,
}

impl Default for SymbolPatternExtractor {
    fn default() -> Self {
        SymbolPatternExtractor {
            // the pattern is a compile-time constant
            pattern: Regex::new(SYMBOL_PATTERN).unwrap(),
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            known: None,
        }
    }
}

impl SymbolPatternExtractor {
    pub fn with_known_symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known = symbols
            .into_iter()
            .map(|s| s.as_ref().trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();
        self.known = Some(known);
        self
    }

    ///
    /// Restrict recognition to the symbols listed in a file, one per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    pub fn with_symbol_file(self, path: &Path) -> Result<Self, MineError> {
        let contents = fs::read_to_string(path)?;
        let symbols = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));
        Ok(self.with_known_symbols(symbols))
    }

    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_uppercase()));
        self
    }

    fn accepts(&self, candidate: &str) -> bool {
        if self.stop_words.contains(candidate) {
            return false;
        }
        match &self.known {
            Some(known) => known.contains(candidate),
            None => true,
        }
    }
}

impl GeneEntityExtractor for SymbolPatternExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|candidate| self.accepts(candidate))
            .filter(|candidate| seen.insert(*candidate))
            .map(String::from)
            .collect()
    }
}
