//! Property tests for the score type and progress rules.

use balm_core::progress::{UserProgress, XP_PER_LEVEL};
use balm_core::Score;
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_is_always_in_unit_range_and_never_nan(value in prop::num::f64::ANY) {
        let score = Score::new(value);
        prop_assert!(!score.value().is_nan());
        prop_assert!((0.0..=1.0).contains(&score.value()));
    }

    #[test]
    fn level_always_tracks_xp(completions in prop::collection::vec(("[a-z]{1,8}", 0u32..200), 0..20)) {
        let mut progress = UserProgress::default();
        for (title, xp) in &completions {
            progress.complete(title, *xp);
        }
        prop_assert_eq!(progress.level, progress.xp / XP_PER_LEVEL + 1);
    }

    #[test]
    fn completed_titles_are_unique(completions in prop::collection::vec(("[a-c]{1,2}", 0u32..50), 0..30)) {
        let mut progress = UserProgress::default();
        for (title, xp) in &completions {
            progress.complete(title, *xp);
        }
        let mut titles = progress.completed.clone();
        titles.sort();
        titles.dedup();
        prop_assert_eq!(titles.len(), progress.completed.len());
    }
}
