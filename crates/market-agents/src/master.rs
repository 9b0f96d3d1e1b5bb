//! Master agent coordinating the six worker agents.

use needs_engine::{FeedbackCorpus, NeedsEngine};
use shared_types::{ReportPayload, SearchQuery};

use crate::agent::WorkerAgent;
use crate::workers::{
    ClinicalTrialsAgent, EximTrendsAgent, InternalKnowledgeAgent, MarketInsightsAgent,
    PatentLandscapeAgent, WebIntelligenceAgent,
};

/// Master agent
pub struct MasterAgent {
    market_agent: MarketInsightsAgent,
    exim_agent: EximTrendsAgent,
    patent_agent: PatentLandscapeAgent,
    clinical_agent: ClinicalTrialsAgent,
    internal_agent: InternalKnowledgeAgent,
    web_agent: WebIntelligenceAgent,
    needs_engine: NeedsEngine,
}

impl MasterAgent {
    pub fn new(needs_engine: NeedsEngine) -> Self {
        Self {
            market_agent: MarketInsightsAgent,
            exim_agent: EximTrendsAgent,
            patent_agent: PatentLandscapeAgent,
            clinical_agent: ClinicalTrialsAgent,
            internal_agent: InternalKnowledgeAgent,
            web_agent: WebIntelligenceAgent,
            needs_engine,
        }
    }

    /// Run every worker in sequence and assemble the report payload
    pub fn run(&self, query: &SearchQuery) -> ReportPayload {
        tracing::info!(
            "Running innovation search for {} / {} ({})",
            query.molecule,
            query.indication,
            query.geography
        );

        let market = run_worker(&self.market_agent, query);
        let exim = run_worker(&self.exim_agent, query);
        let patents = run_worker(&self.patent_agent, query);
        let trials = run_worker(&self.clinical_agent, query);
        let internal = run_worker(&self.internal_agent, query);
        let web = run_worker(&self.web_agent, query);

        let assessment = self.needs_engine.assess(
            &query.molecule,
            &query.indication,
            &FeedbackCorpus::from_insights(&internal, &web),
        );

        tracing::debug!(
            "Derived {} unmet needs, targeting {}",
            assessment.unmet_needs.len(),
            assessment.population
        );

        ReportPayload {
            molecule: query.molecule.clone(),
            primary_indication: query.indication.clone(),
            target_geography: query.geography.clone(),
            unmet_needs: assessment.unmet_needs.to_strings(),
            clinical_rationale: assessment.clinical_rationale,
            market_overview: market,
            exim_overview: exim,
            patent_landscape: patents,
            clinical_trials_landscape: trials,
            internal_insights: internal,
            web_insights: web,
            innovation_hypothesis: assessment.innovation_hypothesis,
        }
    }
}

fn run_worker<W: WorkerAgent>(worker: &W, query: &SearchQuery) -> W::Output {
    tracing::debug!("Calling worker agent: {}", worker.name());
    worker.run(query)
}

impl Default for MasterAgent {
    fn default() -> Self {
        Self::new(NeedsEngine::new())
    }
}

/// Master agent wired with the default workers and rule tables
pub fn build_master_agent() -> MasterAgent {
    MasterAgent::default()
}
