use serde::{Deserialize, Serialize};

/// A reference mapping from a trigger phrase to an issue category.
///
/// Many entries may map to the same issue, and keywords are not required to
/// be unique across issues. Loaded once by the caller and treated as
/// immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub issue: String,
    pub score: f64,
}

impl KeywordEntry {
    pub fn new(keyword: impl Into<String>, issue: impl Into<String>, score: f64) -> Self {
        Self {
            keyword: keyword.into(),
            issue: issue.into(),
            score,
        }
    }
}
