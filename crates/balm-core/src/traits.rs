//! Collaborator seams around the engine.
//!
//! The engine itself is pure; presentation and persistence layers plug in
//! behind these traits.

use crate::errors::EngineResult;
use crate::models::Recommendation;
use crate::progress::UserProgress;

/// End-to-end recommendation: resolve an issue from raw text, then select
/// the interventions appropriate for it.
///
/// Callers must reject empty or whitespace-only input before invoking this;
/// the contract assumes non-empty, trimmed text.
pub trait Recommender {
    fn recommend(&self, input: &str) -> EngineResult<Recommendation>;
}

/// Persistence seam for completion history and XP.
///
/// The matching engine never calls this. It exists so presentation layers
/// can track which interventions were already completed without the engine
/// knowing about storage.
pub trait ProgressStore {
    /// Current accumulated progress.
    fn progress(&self) -> UserProgress;

    /// Record a completed intervention and return the updated progress.
    fn mark_complete(&mut self, title: &str, xp: u32) -> UserProgress;
}
