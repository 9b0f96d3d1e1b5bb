use shared_types::{InternalDocument, InternalInsights, SearchQuery};

use crate::agent::WorkerAgent;

const FIELD_FEEDBACK: &[&str] = &[
    "Adherence in elderly patients is challenging with current dosing.",
    "Some patients report dizziness and daytime sedation.",
    "Diabetic neuropathy subgroup may benefit from tailored regimen.",
];

const INTERNAL_DOCUMENTS: &[(&str, &str)] = &[
    (
        "FieldNotes_2024_Q3",
        "Elderly adherence concerns & sedation reports.",
    ),
    (
        "StrategicBrief_2025",
        "Focus on differentiation via formulation & dosing.",
    ),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct InternalKnowledgeAgent;

impl WorkerAgent for InternalKnowledgeAgent {
    type Output = InternalInsights;

    fn name(&self) -> &'static str {
        "internal-knowledge"
    }

    fn run(&self, _query: &SearchQuery) -> InternalInsights {
        InternalInsights {
            strategic_priorities_match: Some("Medium".to_string()),
            comments: "Mock internal insights summarizing strategy fit and feedback.".to_string(),
            field_feedback: FIELD_FEEDBACK.iter().map(|s| s.to_string()).collect(),
            raw_rows: INTERNAL_DOCUMENTS
                .iter()
                .map(|&(doc, summary)| InternalDocument {
                    doc: doc.to_string(),
                    summary: summary.to_string(),
                })
                .collect(),
        }
    }
}
