//! Intervention selection: safety override for high-risk issues,
//! exact-match merge for everything else.

use balm_core::models::Intervention;

/// Substring that marks an issue as a high-risk disclosure.
const SAFETY_MARKER: &str = "suicidal";

/// Select the interventions appropriate for a resolved issue.
///
/// High-risk issues (any issue containing "suicidal", case-insensitively)
/// draw exclusively from the safety catalog, filtered to entries whose
/// issue name also contains "suicidal". This is a hard policy: the general
/// and extra catalogs are never consulted for high-risk disclosures, even
/// when they contain matching entries.
///
/// All other issues concatenate exact case-insensitive `issue_name`
/// matches from the general catalog, then the extra catalog. Substring
/// matches on other issues never appear. An empty result is a normal,
/// expected outcome for unrecognized issues.
pub fn select(
    issue: &str,
    general: &[Intervention],
    safety: &[Intervention],
    extra: &[Intervention],
) -> Vec<Intervention> {
    let issue_lower = issue.to_lowercase();

    if issue_lower.contains(SAFETY_MARKER) {
        return safety
            .iter()
            .filter(|int| int.issue_name.to_lowercase().contains(SAFETY_MARKER))
            .cloned()
            .collect();
    }

    general
        .iter()
        .chain(extra.iter())
        .filter(|int| int.issue_name.to_lowercase() == issue_lower)
        .cloned()
        .collect()
}
