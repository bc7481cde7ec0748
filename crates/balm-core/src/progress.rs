use serde::{Deserialize, Serialize};

/// XP required to advance one level.
pub const XP_PER_LEVEL: u32 = 100;

/// Accumulated completion state for one user.
///
/// Pure value type: the engine never reads or writes it, and persistence
/// belongs to the caller (see [`crate::traits::ProgressStore`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProgress {
    pub xp: u32,
    pub level: u32,
    pub completed: Vec<String>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            completed: Vec::new(),
        }
    }
}

impl UserProgress {
    /// Record a completed intervention, awarding its XP.
    ///
    /// Completing the same title twice is a no-op: XP is only awarded once
    /// per intervention.
    pub fn complete(&mut self, title: &str, xp: u32) {
        if self.is_completed(title) {
            return;
        }
        self.completed.push(title.to_string());
        self.xp += xp;
        self.level = self.xp / XP_PER_LEVEL + 1;
    }

    pub fn is_completed(&self, title: &str) -> bool {
        self.completed.iter().any(|t| t == title)
    }
}
