use serde::{Deserialize, Serialize};

/// What kind of activity an intervention prescribes.
///
/// The wire format distinguishes the two shapes by presence of a
/// `"Journal Template"` field; in the domain model the distinction is a
/// tagged variant resolved by pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterventionKind {
    /// A guided exercise with no journaling component.
    Exercise,
    /// A journaling prompt seeded from a template.
    Journal {
        template: String,
        /// Sub-type label carried by extended catalogs.
        sub_type: Option<String>,
    },
}

/// A prescribed micro-activity awarding experience points on completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Intervention {
    pub title: String,
    pub description: String,
    pub xp: u32,
    pub issue_name: String,
    pub kind: InterventionKind,
}

impl Intervention {
    pub fn is_journaling(&self) -> bool {
        matches!(self.kind, InterventionKind::Journal { .. })
    }
}

/// Wire representation of an intervention record.
///
/// Field names mirror the reference data files verbatim; consuming code
/// matches on them literally, so they must not be renamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "XP")]
    pub xp: u32,
    #[serde(rename = "Issue Name")]
    pub issue_name: String,
    #[serde(rename = "Journal Template", skip_serializing_if = "Option::is_none")]
    pub journal_template: Option<String>,
    #[serde(
        rename = "Intervention Sub Type",
        skip_serializing_if = "Option::is_none"
    )]
    pub sub_type: Option<String>,
}

impl From<InterventionRecord> for Intervention {
    fn from(record: InterventionRecord) -> Self {
        let kind = match record.journal_template {
            Some(template) => InterventionKind::Journal {
                template,
                sub_type: record.sub_type,
            },
            None => InterventionKind::Exercise,
        };
        Self {
            title: record.title,
            description: record.description,
            xp: record.xp,
            issue_name: record.issue_name,
            kind,
        }
    }
}

impl From<Intervention> for InterventionRecord {
    fn from(intervention: Intervention) -> Self {
        let (journal_template, sub_type) = match intervention.kind {
            InterventionKind::Journal { template, sub_type } => (Some(template), sub_type),
            InterventionKind::Exercise => (None, None),
        };
        Self {
            title: intervention.title,
            description: intervention.description,
            xp: intervention.xp,
            issue_name: intervention.issue_name,
            journal_template,
            sub_type,
        }
    }
}

/// Deserialize an ordered catalog from its JSON wire form.
pub fn catalog_from_json(json: &str) -> serde_json::Result<Vec<Intervention>> {
    let records: Vec<InterventionRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(Intervention::from).collect())
}
