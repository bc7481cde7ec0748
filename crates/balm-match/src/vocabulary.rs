//! Precomputed keyword vocabulary and term-frequency vectors.
//!
//! The keyword table is immutable reference data, so the bag-of-words
//! vocabulary and the per-keyword vectors are derived once per load and
//! reused across queries instead of being rebuilt on every match call.

use std::collections::HashSet;

use balm_core::models::KeywordEntry;

use crate::text;

/// Immutable derived index over a keyword set.
///
/// Holds the deduplicated stemmed vocabulary in first-seen order (so
/// iteration is deterministic) and one term-frequency vector per keyword
/// entry, in the same order as the source slice.
#[derive(Debug, Clone)]
pub struct KeywordIndex {
    entries: Vec<KeywordEntry>,
    vocabulary: Vec<String>,
    keyword_vectors: Vec<Vec<f64>>,
}

impl KeywordIndex {
    /// Build the index from reference keyword entries.
    pub fn new(entries: &[KeywordEntry]) -> Self {
        let mut vocabulary = Vec::new();
        let mut seen = HashSet::new();
        for entry in entries {
            for token in text::tokenize(&entry.keyword) {
                if seen.insert(token.clone()) {
                    vocabulary.push(token);
                }
            }
        }

        let keyword_vectors = entries
            .iter()
            .map(|entry| term_frequency(&text::tokenize(&entry.keyword), &vocabulary))
            .collect();

        Self {
            entries: entries.to_vec(),
            vocabulary,
            keyword_vectors,
        }
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn keyword_vectors(&self) -> &[Vec<f64>] {
        &self.keyword_vectors
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Term-frequency vector of arbitrary input text over this vocabulary.
    pub fn vectorize(&self, input: &str) -> Vec<f64> {
        term_frequency(&text::tokenize(input), &self.vocabulary)
    }
}

/// Counts per vocabulary term, normalized by total token count.
/// Zero tokens produce a zero vector rather than a division fault.
fn term_frequency(tokens: &[String], vocabulary: &[String]) -> Vec<f64> {
    if tokens.is_empty() {
        return vec![0.0; vocabulary.len()];
    }
    let total = tokens.len() as f64;
    vocabulary
        .iter()
        .map(|term| {
            let count = tokens.iter().filter(|t| *t == term).count();
            count as f64 / total
        })
        .collect()
}
