//! Bag-of-words cosine matcher over the keyword vocabulary.

use balm_core::errors::{EngineError, EngineResult};
use balm_core::models::MatchResult;
use balm_core::Score;

use crate::vocabulary::KeywordIndex;

/// Cosine similarity between two equal-length vectors.
///
/// Returns 0.0 when either vector has zero magnitude. Mismatched lengths
/// are a contract violation and fail fast; they are never truncated.
pub fn cosine(a: &[f64], b: &[f64]) -> EngineResult<f64> {
    if a.len() != b.len() {
        return Err(EngineError::VectorLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a * norm_b))
}

/// Score input text against every keyword vector and keep the best match.
///
/// Ties are broken by first occurrence in the keyword sequence. A best
/// similarity at or below `threshold` collapses to the no-match sentinel.
pub fn match_vector(input: &str, index: &KeywordIndex, threshold: f64) -> EngineResult<MatchResult> {
    if index.is_empty() {
        return Ok(MatchResult::no_match());
    }

    let input_vector = index.vectorize(input);

    let mut best: Option<(usize, f64)> = None;
    for (i, keyword_vector) in index.keyword_vectors().iter().enumerate() {
        let similarity = cosine(&input_vector, keyword_vector)?;
        // Strictly greater keeps the first occurrence on ties.
        if best.map_or(true, |(_, s)| similarity > s) {
            best = Some((i, similarity));
        }
    }

    match best {
        Some((i, similarity)) if similarity > threshold => Ok(MatchResult::new(
            index.entries()[i].issue.clone(),
            Score::new(similarity),
        )),
        _ => Ok(MatchResult::no_match()),
    }
}
