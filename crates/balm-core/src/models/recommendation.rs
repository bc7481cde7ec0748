use crate::models::{Intervention, MatchResult};

/// Combined output of the full pipeline: the resolved issue with its score,
/// plus the interventions selected for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub result: MatchResult,
    pub interventions: Vec<Intervention>,
}

impl Recommendation {
    /// True when no issue cleared the threshold and nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.result.is_no_match() && self.interventions.is_empty()
    }
}
