//! IQVIA-style market sizing

use shared_types::{MarketOverview, Number, SalesRow, SearchQuery};

use crate::agent::WorkerAgent;

const SALES_USD_MN: &[(u16, u32)] = &[
    (2020, 120),
    (2021, 135),
    (2022, 150),
    (2023, 160),
    (2024, 172),
];

const CAGR_3YR_PCT: f64 = 4.8;

#[derive(Debug, Clone, Copy, Default)]
pub struct MarketInsightsAgent;

impl WorkerAgent for MarketInsightsAgent {
    type Output = MarketOverview;

    fn name(&self) -> &'static str {
        "market-insights"
    }

    fn run(&self, query: &SearchQuery) -> MarketOverview {
        let raw_rows: Vec<SalesRow> = SALES_USD_MN
            .iter()
            .map(|&(year, sales_usd_mn)| SalesRow { year, sales_usd_mn })
            .collect();

        // Market size is the latest year's sales
        let latest = raw_rows.last();

        MarketOverview {
            market_size_usd_mn: latest.map(|row| Number::from(row.sales_usd_mn)),
            cagr_3yr_pct: Number::from_f64(CAGR_3YR_PCT),
            top_year: latest.map(|row| Number::from(row.year)),
            comments: format!(
                "Mock IQVIA-style market overview for {} in {}.",
                query.molecule, query.geography
            ),
            raw_rows,
        }
    }
}
