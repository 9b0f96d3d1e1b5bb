//! Rule-based unmet-need extraction
//!
//! Scans internal field feedback and external forum highlights for keyword
//! triggers and maps each hit to a canonical need statement. The result is
//! deduplicated in first-occurrence order (internal texts first), then used
//! to pick the target population of the innovation hypothesis.

pub mod hypothesis;
pub mod needs;
pub mod patterns;
pub mod rules;

pub use hypothesis::{innovation_hypothesis, Population, CLINICAL_RATIONALE};
pub use needs::{NeedStatement, UnmetNeeds};
pub use rules::{NeedRule, EXTERNAL_RULES, INTERNAL_RULES};

use serde::Serialize;
use shared_types::{InternalInsights, WebInsights};

/// Free-text inputs to extraction
#[derive(Debug, Clone, Copy)]
pub struct FeedbackCorpus<'a> {
    /// Internal field-feedback notes
    pub internal: &'a [String],
    /// External patient forum highlights
    pub external: &'a [String],
}

impl<'a> FeedbackCorpus<'a> {
    pub fn new(internal: &'a [String], external: &'a [String]) -> Self {
        Self { internal, external }
    }

    pub fn from_insights(internal: &'a InternalInsights, web: &'a WebInsights) -> Self {
        Self {
            internal: &internal.field_feedback,
            external: &web.patient_forum_highlights,
        }
    }
}

/// Everything derived from a feedback corpus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeedsAssessment {
    pub unmet_needs: UnmetNeeds,
    pub population: Population,
    pub clinical_rationale: String,
    pub innovation_hypothesis: String,
}

/// NeedsEngine entry point
pub struct NeedsEngine {
    internal_rules: Vec<NeedRule>,
    external_rules: Vec<NeedRule>,
}

impl NeedsEngine {
    pub fn new() -> Self {
        Self::with_rules(INTERNAL_RULES.to_vec(), EXTERNAL_RULES.to_vec())
    }

    /// Engine with custom rule tables, evaluated in the given order
    pub fn with_rules(internal_rules: Vec<NeedRule>, external_rules: Vec<NeedRule>) -> Self {
        Self {
            internal_rules,
            external_rules,
        }
    }

    pub fn extract(&self, corpus: &FeedbackCorpus<'_>) -> UnmetNeeds {
        let mut hits = rules::scan(corpus.internal, &self.internal_rules);
        hits.extend(rules::scan(corpus.external, &self.external_rules));
        UnmetNeeds::from_matches(hits)
    }

    /// Extract needs, then derive population, rationale and hypothesis
    pub fn assess(
        &self,
        molecule: &str,
        indication: &str,
        corpus: &FeedbackCorpus<'_>,
    ) -> NeedsAssessment {
        let unmet_needs = self.extract(corpus);
        let population = Population::for_needs(unmet_needs.iter().map(NeedStatement::as_str));
        NeedsAssessment {
            innovation_hypothesis: innovation_hypothesis(molecule, indication, population),
            clinical_rationale: CLINICAL_RATIONALE.to_string(),
            unmet_needs,
            population,
        }
    }
}

impl Default for NeedsEngine {
    fn default() -> Self {
        Self::new()
    }
}
