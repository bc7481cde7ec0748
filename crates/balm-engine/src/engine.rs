//! RecommendEngine: resolve an issue from raw text, then select the
//! interventions appropriate for it.

use tracing::info;

use balm_core::config::MatchConfig;
use balm_core::errors::EngineResult;
use balm_core::models::{Intervention, KeywordEntry, Recommendation};
use balm_core::traits::Recommender;
use balm_match::{KeywordIndex, Resolver};

use crate::selector;

/// Immutable reference data the engine works against.
///
/// Loaded once by the caller; the engine never mutates it, so one set can
/// serve any number of concurrent queries without coordination.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub keywords: Vec<KeywordEntry>,
    pub general: Vec<Intervention>,
    pub safety: Vec<Intervention>,
    pub extra: Vec<Intervention>,
}

/// End-to-end pipeline: tokenize → match → resolve → select.
pub struct RecommendEngine {
    resolver: Resolver,
    general: Vec<Intervention>,
    safety: Vec<Intervention>,
    extra: Vec<Intervention>,
}

impl RecommendEngine {
    /// Build the engine, deriving the keyword index once from the
    /// reference data.
    pub fn new(data: ReferenceData, config: MatchConfig) -> Self {
        let index = KeywordIndex::new(&data.keywords);
        Self {
            resolver: Resolver::new(index, config),
            general: data.general,
            safety: data.safety,
            extra: data.extra,
        }
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }
}

impl Recommender for RecommendEngine {
    fn recommend(&self, input: &str) -> EngineResult<Recommendation> {
        let result = self.resolver.resolve(input)?;
        let interventions =
            selector::select(&result.issue, &self.general, &self.safety, &self.extra);

        info!(
            issue = %result.issue,
            score = %result.score,
            interventions = interventions.len(),
            "recommendation complete"
        );

        Ok(Recommendation {
            result,
            interventions,
        })
    }
}
