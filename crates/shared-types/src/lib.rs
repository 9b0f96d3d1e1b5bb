pub mod error;
pub mod kpi;
pub mod payload;
pub mod query;
pub mod types;

pub use error::{PayloadError, QueryError};
pub use kpi::KpiCard;
pub use payload::{or_placeholder, ReportPayload, PLACEHOLDER};
pub use query::{SearchQuery, DEFAULT_GEOGRAPHY};
pub use types::{
    ClinicalTrialsLandscape, InternalDocument, InternalInsights, MarketOverview, NotableTrial,
    PatentLandscape, PatentRecord, PhaseDistribution, SalesRow, TradeOverview, TradeRow,
    WebInsights, WebSnippet,
};

/// Numeric payload value, kept exactly as written in JSON
pub use serde_json::Number;
