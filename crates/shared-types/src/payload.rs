//! The report payload assembled by the master agent
//!
//! Every field has a default so that partially filled payloads submitted
//! over the API still compose into a report. Only a wrong shape (e.g. a
//! string where a list is expected) is rejected, and only here.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;
use crate::types::{
    ClinicalTrialsLandscape, InternalInsights, MarketOverview, PatentLandscape, TradeOverview,
    WebInsights,
};

/// Literal printed in place of any missing scalar value
pub const PLACEHOLDER: &str = "NA";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPayload {
    pub molecule: String,
    pub primary_indication: String,
    pub target_geography: String,
    pub unmet_needs: Vec<String>,
    pub clinical_rationale: String,
    pub market_overview: MarketOverview,
    pub exim_overview: TradeOverview,
    pub patent_landscape: PatentLandscape,
    pub clinical_trials_landscape: ClinicalTrialsLandscape,
    pub internal_insights: InternalInsights,
    pub web_insights: WebInsights,
    pub innovation_hypothesis: String,
}

impl ReportPayload {
    /// Parse a payload from JSON text
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a payload from an already-decoded JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self, PayloadError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Format an optional value, falling back to [`PLACEHOLDER`]
pub fn or_placeholder<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_is_default_payload() {
        let payload = ReportPayload::from_json("{}").unwrap();
        assert_eq!(payload, ReportPayload::default());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let payload = ReportPayload::from_json(
            r#"{
                "molecule": "pregabalin",
                "market_overview": {"cagr_3yr_pct": 4.8},
                "web_insights": {"recent_news": ["New formulation approaches"]}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.molecule, "pregabalin");
        assert_eq!(
            payload.market_overview.cagr_3yr_pct.map(|n| n.to_string()),
            Some("4.8".to_string())
        );
        assert_eq!(payload.market_overview.market_size_usd_mn, None);
        assert_eq!(payload.web_insights.recent_news.len(), 1);
        assert!(payload.web_insights.guideline_extracts.is_empty());
    }

    #[test]
    fn test_well_typed_values_are_accepted_as_given() {
        let payload = ReportPayload::from_json(
            r#"{
                "market_overview": {"market_size_usd_mn": 172.5, "cagr_3yr_pct": 5.0},
                "patent_landscape": {"core_patent_expiry": "Q4 2026"},
                "clinical_trials_landscape": {"total_trials": 30.5}
            }"#,
        )
        .unwrap();

        let market = &payload.market_overview;
        assert_eq!(or_placeholder(market.market_size_usd_mn.as_ref()), "172.5");
        assert_eq!(or_placeholder(market.cagr_3yr_pct.as_ref()), "5.0");
        assert_eq!(
            or_placeholder(payload.patent_landscape.core_patent_expiry.as_ref()),
            "Q4 2026"
        );
        assert_eq!(
            or_placeholder(payload.clinical_trials_landscape.total_trials.as_ref()),
            "30.5"
        );
    }

    #[test]
    fn test_string_where_number_expected_is_rejected() {
        let result =
            ReportPayload::from_json(r#"{"market_overview": {"market_size_usd_mn": "large"}}"#);
        assert!(matches!(result, Err(PayloadError::Malformed(_))));
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result = ReportPayload::from_json(r#"{"unmet_needs": "not a list"}"#);
        assert!(matches!(result, Err(PayloadError::Malformed(_))));
    }

    #[test]
    fn test_non_object_value_is_rejected() {
        let result = ReportPayload::from_value(serde_json::json!([1, 2, 3]));
        assert!(result.is_err());
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(Some(&4.8)), "4.8");
        assert_eq!(or_placeholder::<u32>(None), "NA");
    }
}
