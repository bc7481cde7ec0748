//! Issue resolution: vector matcher first, lexical fallback second.

use tracing::debug;

use balm_core::config::MatchConfig;
use balm_core::errors::EngineResult;
use balm_core::models::MatchResult;

use crate::lexical;
use crate::vector;
use crate::vocabulary::KeywordIndex;

/// Resolves raw user text to a single best issue with a confidence score.
///
/// The vector matcher is authoritative; the lexical matcher is a safety
/// net used only when the vector score is exactly zero. The two scores are
/// never blended or averaged.
pub struct Resolver {
    index: KeywordIndex,
    config: MatchConfig,
}

impl Resolver {
    pub fn new(index: KeywordIndex, config: MatchConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// Resolve text to (issue, score), falling back to lexical similarity
    /// when bag-of-words matching is inconclusive.
    pub fn resolve(&self, input: &str) -> EngineResult<MatchResult> {
        let vector_result = vector::match_vector(input, &self.index, self.config.threshold)?;
        if !vector_result.score.is_zero() {
            debug!(
                issue = %vector_result.issue,
                score = %vector_result.score,
                "vector match accepted"
            );
            return Ok(vector_result);
        }

        let lexical_result =
            lexical::match_lexical(input, self.index.entries(), self.config.threshold);
        debug!(
            issue = %lexical_result.issue,
            score = %lexical_result.score,
            "vector match inconclusive, using lexical fallback"
        );
        Ok(lexical_result)
    }
}
