//! Text normalization: lowercasing, word splitting, suffix stripping.

mod stem;

pub use stem::stem;

/// Split raw text into lowercased, stemmed word tokens.
///
/// Splits on any run of non-word characters and drops empty tokens,
/// including tokens emptied by stemming (a bare "s"), so empty or
/// all-punctuation input yields an empty Vec. No error conditions.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(stem)
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
