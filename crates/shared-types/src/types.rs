//! Section records produced by the worker agents
//!
//! Scalar fields are optional so that a payload submitted from outside can
//! omit any of them; readers fall back to [`crate::PLACEHOLDER`]. Numeric
//! fields keep the JSON number as given, so `172`, `172.5` and `5.0` print
//! back unchanged.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SalesRow {
    pub year: u16,
    pub sales_usd_mn: u32,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MarketOverview {
    pub market_size_usd_mn: Option<Number>,
    pub cagr_3yr_pct: Option<Number>,
    pub top_year: Option<Number>,
    pub comments: String,
    pub raw_rows: Vec<SalesRow>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TradeRow {
    pub country: String, // ISO 3166 alpha-2
    pub price_usd_per_kg: f64,
    pub volume_kg: u32,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TradeOverview {
    pub api_import_dependency: Option<String>,
    pub avg_import_price_per_kg_usd: Option<Number>,
    pub comments: String,
    pub raw_rows: Vec<TradeRow>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PatentRecord {
    pub assignee: String,
    pub title: String,
    pub year: u16,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PatentLandscape {
    /// Usually an ISO date, but any text is printed as given
    pub core_patent_expiry: Option<String>,
    pub fto_risk: Option<String>,
    pub comments: String,
    pub patents: Vec<PatentRecord>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NotableTrial {
    pub id: String, // e.g., "NCT00000001"
    pub phase: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClinicalTrialsLandscape {
    pub total_trials: Option<Number>,
    pub active_trials: Option<Number>,
    pub phase_distribution: Option<PhaseDistribution>,
    pub comments: String,
    pub notable_trials: Vec<NotableTrial>,
}

impl ClinicalTrialsLandscape {
    /// Render the phase distribution as `Phase I: 6, Phase II: 12, ...`
    pub fn phase_summary(&self) -> Option<String> {
        self.phase_distribution.as_ref().map(|phases| {
            phases
                .iter()
                .map(|(phase, count)| format!("{}: {}", phase, count))
                .collect::<Vec<_>>()
                .join(", ")
        })
    }
}

/// Trial counts keyed by phase label, in the order the labels were given
///
/// (De)serializes as a JSON object. A repeated label keeps its first
/// position and takes the last count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhaseDistribution(Vec<(String, Number)>);

impl PhaseDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, phase: impl Into<String>, count: impl Into<Number>) {
        let phase = phase.into();
        let count = count.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == phase) {
            Some((_, slot)) => *slot = count,
            None => self.0.push((phase, count)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Number)> {
        self.0.iter().map(|(phase, count)| (phase.as_str(), count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Number>> FromIterator<(K, V)> for PhaseDistribution {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut phases = Self::new();
        for (phase, count) in iter {
            phases.insert(phase, count);
        }
        phases
    }
}

impl Serialize for PhaseDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (phase, count) in &self.0 {
            map.serialize_entry(phase, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for PhaseDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PhaseVisitor;

        impl<'de> Visitor<'de> for PhaseVisitor {
            type Value = PhaseDistribution;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of phase labels to trial counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut phases = PhaseDistribution::new();
                while let Some((phase, count)) = access.next_entry::<String, Number>()? {
                    phases.insert(phase, count);
                }
                Ok(phases)
            }
        }

        deserializer.deserialize_map(PhaseVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InternalDocument {
    pub doc: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct InternalInsights {
    pub strategic_priorities_match: Option<String>,
    pub comments: String,
    pub field_feedback: Vec<String>,
    pub raw_rows: Vec<InternalDocument>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WebSnippet {
    pub source: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WebInsights {
    pub guideline_extracts: Vec<String>,
    pub patient_forum_highlights: Vec<String>,
    pub recent_news: Vec<String>,
    pub raw_rows: Vec<WebSnippet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_summary_keeps_given_order() {
        let phases: PhaseDistribution = [
            ("Phase I", 6u32),
            ("Phase II", 12),
            ("Phase III", 8),
            ("Phase IV", 5),
        ]
        .into_iter()
        .collect();

        let landscape = ClinicalTrialsLandscape {
            phase_distribution: Some(phases),
            ..Default::default()
        };

        assert_eq!(
            landscape.phase_summary().as_deref(),
            Some("Phase I: 6, Phase II: 12, Phase III: 8, Phase IV: 5")
        );
    }

    #[test]
    fn test_phase_distribution_json_keeps_insertion_order() {
        let landscape: ClinicalTrialsLandscape = serde_json::from_str(
            r#"{"phase_distribution":{"Phase II":12,"Early Phase I":2,"Phase I":6}}"#,
        )
        .unwrap();

        assert_eq!(
            landscape.phase_summary().as_deref(),
            Some("Phase II: 12, Early Phase I: 2, Phase I: 6")
        );
        assert_eq!(
            serde_json::to_string(&landscape.phase_distribution).unwrap(),
            r#"{"Phase II":12,"Early Phase I":2,"Phase I":6}"#
        );
    }

    #[test]
    fn test_phase_distribution_repeated_label_keeps_position() {
        let mut phases = PhaseDistribution::new();
        phases.insert("Phase I", 1u32);
        phases.insert("Phase II", 2u32);
        phases.insert("Phase I", 3u32);

        let entries: Vec<String> = phases.iter().map(|(p, c)| format!("{}={}", p, c)).collect();
        assert_eq!(entries, vec!["Phase I=3", "Phase II=2"]);
    }

    #[test]
    fn test_phase_distribution_rejects_non_numeric_counts() {
        let result: Result<ClinicalTrialsLandscape, _> =
            serde_json::from_str(r#"{"phase_distribution":{"Phase I":"six"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_phase_summary_missing() {
        assert_eq!(ClinicalTrialsLandscape::default().phase_summary(), None);
    }

    #[test]
    fn test_patent_expiry_accepts_free_text() {
        let landscape: PatentLandscape =
            serde_json::from_str(r#"{"core_patent_expiry":"Q4 2026"}"#).unwrap();
        assert_eq!(landscape.core_patent_expiry.as_deref(), Some("Q4 2026"));
        assert!(landscape.fto_risk.is_none());
    }

    #[test]
    fn test_numbers_print_as_given() {
        let market: MarketOverview = serde_json::from_str(
            r#"{"market_size_usd_mn":172.5,"cagr_3yr_pct":5.0,"top_year":2024}"#,
        )
        .unwrap();

        assert_eq!(market.market_size_usd_mn.unwrap().to_string(), "172.5");
        assert_eq!(market.cagr_3yr_pct.unwrap().to_string(), "5.0");
        assert_eq!(market.top_year.unwrap().to_string(), "2024");
    }
}
