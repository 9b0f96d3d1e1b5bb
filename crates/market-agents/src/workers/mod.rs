pub mod clinical;
pub mod exim;
pub mod internal;
pub mod market;
pub mod patents;
pub mod web;

pub use clinical::ClinicalTrialsAgent;
pub use exim::EximTrendsAgent;
pub use internal::InternalKnowledgeAgent;
pub use market::MarketInsightsAgent;
pub use patents::PatentLandscapeAgent;
pub use web::WebIntelligenceAgent;
