use serde::{Deserialize, Serialize};

use crate::score::Score;

/// Sentinel issue returned when no keyword clears the acceptance threshold.
///
/// Callers check for this value rather than treating a low score as an
/// error; an unresolvable issue is a normal outcome.
pub const NO_MATCH_ISSUE: &str = "No specific match found";

/// Outcome of matching user text against the keyword table.
/// Transient, produced per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub issue: String,
    pub score: Score,
}

impl MatchResult {
    pub fn new(issue: impl Into<String>, score: Score) -> Self {
        Self {
            issue: issue.into(),
            score,
        }
    }

    /// The no-match sentinel with score 0.
    pub fn no_match() -> Self {
        Self {
            issue: NO_MATCH_ISSUE.to_string(),
            score: Score::zero(),
        }
    }

    pub fn is_no_match(&self) -> bool {
        self.issue == NO_MATCH_ISSUE
    }
}
