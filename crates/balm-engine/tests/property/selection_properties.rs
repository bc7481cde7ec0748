//! Property tests for the selection policy.

use balm_core::models::{Intervention, InterventionKind};
use balm_engine::selector::select;
use proptest::prelude::*;

fn arb_issue() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z ]{1,20}",
        Just("Suicidal Thoughts".to_string()),
        Just("suicidal ideation".to_string()),
        Just("Anxiety".to_string()),
    ]
}

fn arb_intervention() -> impl Strategy<Value = Intervention> {
    ("[A-Za-z ]{1,16}", arb_issue(), 0u32..50).prop_map(|(title, issue_name, xp)| Intervention {
        title,
        description: String::new(),
        xp,
        issue_name,
        kind: InterventionKind::Exercise,
    })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Intervention>> {
    prop::collection::vec(arb_intervention(), 0..12)
}

proptest! {
    #[test]
    fn safety_branch_never_leaks_general_or_extra_entries(
        general in arb_catalog(),
        safety in arb_catalog(),
        extra in arb_catalog(),
    ) {
        let selected = select("Suicidal Thoughts", &general, &safety, &extra);
        for intervention in &selected {
            prop_assert!(safety.contains(intervention));
            prop_assert!(
                intervention.issue_name.to_lowercase().contains("suicidal")
            );
        }
    }

    #[test]
    fn normal_branch_only_returns_exact_issue_matches(
        issue in "[A-Za-z ]{1,20}",
        general in arb_catalog(),
        safety in arb_catalog(),
        extra in arb_catalog(),
    ) {
        prop_assume!(!issue.to_lowercase().contains("suicidal"));
        let selected = select(&issue, &general, &safety, &extra);
        for intervention in &selected {
            prop_assert_eq!(
                intervention.issue_name.to_lowercase(),
                issue.to_lowercase()
            );
            prop_assert!(general.contains(intervention) || extra.contains(intervention));
        }
    }

    #[test]
    fn select_is_idempotent(
        issue in arb_issue(),
        general in arb_catalog(),
        safety in arb_catalog(),
        extra in arb_catalog(),
    ) {
        let first = select(&issue, &general, &safety, &extra);
        let second = select(&issue, &general, &safety, &extra);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn selection_size_never_exceeds_the_consulted_catalogs(
        issue in arb_issue(),
        general in arb_catalog(),
        safety in arb_catalog(),
        extra in arb_catalog(),
    ) {
        let selected = select(&issue, &general, &safety, &extra);
        if issue.to_lowercase().contains("suicidal") {
            prop_assert!(selected.len() <= safety.len());
        } else {
            prop_assert!(selected.len() <= general.len() + extra.len());
        }
    }
}
