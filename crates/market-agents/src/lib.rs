//! Master and worker agents
//!
//! Worker agents are deterministic, offline stubs: each returns a fixed
//! record for any query, interpolating only the molecule (and sometimes the
//! geography) into its comments. The master agent calls them in sequence,
//! runs the needs engine over their feedback text and assembles a
//! [`ReportPayload`](shared_types::ReportPayload).

pub mod agent;
pub mod master;
pub mod workers;

pub use agent::WorkerAgent;
pub use master::{build_master_agent, MasterAgent};
pub use workers::{
    ClinicalTrialsAgent, EximTrendsAgent, InternalKnowledgeAgent, MarketInsightsAgent,
    PatentLandscapeAgent, WebIntelligenceAgent,
};
