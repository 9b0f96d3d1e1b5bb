//! EXIM-style API trade flows

use shared_types::{Number, SearchQuery, TradeOverview, TradeRow};

use crate::agent::WorkerAgent;

const TRADE_ROWS: &[(&str, f64, u32)] = &[
    ("IN", 95.0, 12000),
    ("CN", 88.0, 9000),
    ("DE", 110.0, 3500),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EximTrendsAgent;

impl WorkerAgent for EximTrendsAgent {
    type Output = TradeOverview;

    fn name(&self) -> &'static str {
        "exim-trends"
    }

    fn run(&self, query: &SearchQuery) -> TradeOverview {
        let raw_rows: Vec<TradeRow> = TRADE_ROWS
            .iter()
            .map(|&(country, price_usd_per_kg, volume_kg)| TradeRow {
                country: country.to_string(),
                price_usd_per_kg,
                volume_kg,
            })
            .collect();

        TradeOverview {
            api_import_dependency: Some("High".to_string()),
            avg_import_price_per_kg_usd: average_price(&raw_rows).and_then(Number::from_f64),
            comments: format!(
                "Mock EXIM-style trade overview for API related to {}.",
                query.molecule
            ),
            raw_rows,
        }
    }
}

/// Mean price per kg rounded to cents, None for no rows
fn average_price(rows: &[TradeRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let total: f64 = rows.iter().map(|row| row.price_usd_per_kg).sum();
    let mean = total / rows.len() as f64;
    Some((mean * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_price_rounded() {
        let query = SearchQuery::new("pregabalin", "", "US").unwrap();
        let trade = EximTrendsAgent.run(&query);
        assert_eq!(trade.avg_import_price_per_kg_usd, Number::from_f64(97.67));
        assert_eq!(trade.api_import_dependency.as_deref(), Some("High"));
        assert_eq!(trade.raw_rows.len(), 3);
    }

    #[test]
    fn test_average_price_empty() {
        assert_eq!(average_price(&[]), None);
    }
}
