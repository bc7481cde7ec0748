//! # balm-core
//!
//! Foundation crate for the balm recommendation engine.
//! Defines the data model, score type, errors, config, progress rules,
//! and collaborator traits. Every other crate in the workspace depends
//! on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod progress;
pub mod score;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MatchConfig;
pub use errors::{EngineError, EngineResult};
pub use models::{
    Intervention, InterventionKind, KeywordEntry, MatchResult, Recommendation, NO_MATCH_ISSUE,
};
pub use score::Score;
