//! Headline indicators shown above a search result

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::payload::{or_placeholder, ReportPayload, PLACEHOLDER};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
    pub detail: String,
}

impl KpiCard {
    fn new(label: &str, value: String, detail: String) -> Self {
        Self {
            label: label.to_string(),
            value,
            detail,
        }
    }
}

impl ReportPayload {
    /// Market size, clinical activity, FTO risk and API sourcing, in that order
    pub fn kpis(&self) -> Vec<KpiCard> {
        let market = &self.market_overview;
        let trials = &self.clinical_trials_landscape;
        let patents = &self.patent_landscape;
        let exim = &self.exim_overview;

        let market_size = match &market.market_size_usd_mn {
            Some(size) => format!("{} M USD", size),
            None => PLACEHOLDER.to_string(),
        };

        vec![
            KpiCard::new(
                "Market Size",
                market_size,
                format!("CAGR: {}%", or_placeholder(market.cagr_3yr_pct.as_ref())),
            ),
            KpiCard::new(
                "Clinical Activity",
                count_or_zero(trials.total_trials.as_ref()),
                format!(
                    "Active trials: {}",
                    count_or_zero(trials.active_trials.as_ref())
                ),
            ),
            KpiCard::new(
                "FTO Risk",
                patents
                    .fto_risk
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string()),
                format!(
                    "Core expiry: {}",
                    or_placeholder(patents.core_patent_expiry.as_ref())
                ),
            ),
            KpiCard::new(
                "API Sourcing",
                or_placeholder(exim.api_import_dependency.as_ref()),
                format!(
                    "Avg import price: {} USD/kg",
                    or_placeholder(exim.avg_import_price_per_kg_usd.as_ref())
                ),
            ),
        ]
    }
}

fn count_or_zero(count: Option<&Number>) -> String {
    count.map_or_else(|| "0".to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MarketOverview, TradeOverview};

    #[test]
    fn test_kpis_default_payload() {
        let kpis = ReportPayload::default().kpis();
        assert_eq!(kpis.len(), 4);
        assert_eq!(kpis[0].value, "NA");
        assert_eq!(kpis[0].detail, "CAGR: NA%");
        assert_eq!(kpis[1].value, "0");
        assert_eq!(kpis[1].detail, "Active trials: 0");
        assert_eq!(kpis[2].value, "Unknown");
        assert_eq!(kpis[2].detail, "Core expiry: NA");
        assert_eq!(kpis[3].detail, "Avg import price: NA USD/kg");
    }

    #[test]
    fn test_kpis_filled_payload() {
        let payload = ReportPayload {
            market_overview: MarketOverview {
                market_size_usd_mn: Some(Number::from(172)),
                cagr_3yr_pct: Number::from_f64(4.8),
                ..Default::default()
            },
            exim_overview: TradeOverview {
                api_import_dependency: Some("High".to_string()),
                avg_import_price_per_kg_usd: Number::from_f64(97.67),
                ..Default::default()
            },
            ..Default::default()
        };

        let kpis = payload.kpis();
        assert_eq!(kpis[0].value, "172 M USD");
        assert_eq!(kpis[0].detail, "CAGR: 4.8%");
        assert_eq!(kpis[3].value, "High");
        assert_eq!(kpis[3].detail, "Avg import price: 97.67 USD/kg");
    }
}
