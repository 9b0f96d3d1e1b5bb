use shared_types::{SearchQuery, WebInsights, WebSnippet};

use crate::agent::WorkerAgent;

const GUIDELINE_EXTRACTS: &[&str] = &[
    "Consider dose adjustments in elderly and renally impaired patients.",
    "Monitor CNS-related side effects and counsel patients accordingly.",
];

const PATIENT_FORUM_HIGHLIGHTS: &[&str] = &[
    "Daytime sleepiness was an issue until dose timing was changed.",
    "Pain relief is good but adherence suffers with complex schedules.",
];

const RECENT_NEWS: &[&str] = &[
    "New formulation approaches aim to reduce CNS side effects.",
    "Real-world studies highlight adherence interventions improving outcomes.",
];

const SNIPPETS: &[(&str, &str)] = &[
    (
        "ForumA",
        "Users discuss adjusting dose timing for less sedation.",
    ),
    ("GuidelineX", "Elderly dosing considerations highlighted."),
];

fn owned(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|s| s.to_string()).collect()
}

/// Guidelines, patient forums and news, as a web crawler would surface them
#[derive(Debug, Clone, Copy, Default)]
pub struct WebIntelligenceAgent;

impl WorkerAgent for WebIntelligenceAgent {
    type Output = WebInsights;

    fn name(&self) -> &'static str {
        "web-intelligence"
    }

    fn run(&self, _query: &SearchQuery) -> WebInsights {
        WebInsights {
            guideline_extracts: owned(GUIDELINE_EXTRACTS),
            patient_forum_highlights: owned(PATIENT_FORUM_HIGHLIGHTS),
            recent_news: owned(RECENT_NEWS),
            raw_rows: SNIPPETS
                .iter()
                .map(|&(source, snippet)| WebSnippet {
                    source: source.to_string(),
                    snippet: snippet.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_sections_populated() {
        let query = SearchQuery::new("pregabalin", "", "US").unwrap();
        let web = WebIntelligenceAgent.run(&query);
        assert_eq!(web.guideline_extracts.len(), 2);
        assert_eq!(web.patient_forum_highlights.len(), 2);
        assert_eq!(web.recent_news.len(), 2);
        assert_eq!(web.raw_rows[0].source, "ForumA");
    }
}
