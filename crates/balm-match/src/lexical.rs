//! Whole-string fallback matcher: Sørensen–Dice similarity over character
//! bigrams.
//!
//! Vocabulary-free, so it can succeed on short inputs where sparse
//! bag-of-words vectors score zero across the board.

use std::collections::HashMap;

use balm_core::models::{KeywordEntry, MatchResult};
use balm_core::Score;

/// Dice coefficient over the bigram multisets of two strings, in [0, 1].
///
/// Comparison is case-insensitive and ignores whitespace. Equal strings
/// rate 1.0; strings too short to form a bigram rate 0.0.
pub fn dice_similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return if a.is_empty() { 0.0 } else { 1.0 };
    }

    let a_bigrams = bigrams(&a);
    let b_bigrams = bigrams(&b);
    if a_bigrams.is_empty() || b_bigrams.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<(char, char), usize> = HashMap::new();
    for pair in &a_bigrams {
        *counts.entry(*pair).or_default() += 1;
    }

    // Multiset intersection: each bigram on the left matches at most once.
    let mut intersection = 0usize;
    for pair in &b_bigrams {
        if let Some(count) = counts.get_mut(pair) {
            if *count > 0 {
                *count -= 1;
                intersection += 1;
            }
        }
    }

    2.0 * intersection as f64 / (a_bigrams.len() + b_bigrams.len()) as f64
}

/// Rate input against every keyword string and keep the best match.
///
/// Same acceptance threshold and sentinel rules as the vector matcher,
/// with first-occurrence tie-breaking.
pub fn match_lexical(input: &str, keywords: &[KeywordEntry], threshold: f64) -> MatchResult {
    let mut best: Option<(usize, f64)> = None;
    for (i, entry) in keywords.iter().enumerate() {
        let rating = dice_similarity(input, &entry.keyword);
        if best.map_or(true, |(_, r)| rating > r) {
            best = Some((i, rating));
        }
    }

    match best {
        Some((i, rating)) if rating > threshold => {
            MatchResult::new(keywords[i].issue.clone(), Score::new(rating))
        }
        _ => MatchResult::no_match(),
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

fn bigrams(s: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}
