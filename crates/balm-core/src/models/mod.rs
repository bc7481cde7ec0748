//! Data model: keyword entries, interventions, match results.
//!
//! Everything here is immutable reference data or a transient per-query
//! value; the engine never creates, mutates, or persists entities itself.

mod intervention;
mod keyword;
mod match_result;
mod recommendation;

pub use intervention::{catalog_from_json, Intervention, InterventionKind, InterventionRecord};
pub use keyword::KeywordEntry;
pub use match_result::{MatchResult, NO_MATCH_ISSUE};
pub use recommendation::Recommendation;
