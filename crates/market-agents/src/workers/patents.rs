use chrono::NaiveDate;
use shared_types::{PatentLandscape, PatentRecord, SearchQuery};

use crate::agent::WorkerAgent;

#[derive(Debug, Clone, Copy, Default)]
pub struct PatentLandscapeAgent;

impl WorkerAgent for PatentLandscapeAgent {
    type Output = PatentLandscape;

    fn name(&self) -> &'static str {
        "patent-landscape"
    }

    fn run(&self, query: &SearchQuery) -> PatentLandscape {
        let patents = vec![
            PatentRecord {
                assignee: "PharmaCorp".to_string(),
                title: format!("Formulations of {}", query.molecule),
                year: 2018,
            },
            PatentRecord {
                assignee: "GenPharm".to_string(),
                title: format!("Use of {} in neuropathic pain", query.molecule),
                year: 2017,
            },
        ];

        PatentLandscape {
            core_patent_expiry: NaiveDate::from_ymd_opt(2026, 12, 31)
                .map(|date| date.format("%Y-%m-%d").to_string()),
            fto_risk: Some("Moderate".to_string()),
            comments: "Mock patent landscape. Core filings nearing expiry; some formulation claims persist.".to_string(),
            patents,
        }
    }
}
