//! Narrative fields derived from the unmet-need list

use std::fmt;

use serde::Serialize;

use crate::patterns::ELDERLY_POPULATION_KEYWORD;

/// Fixed rationale attached to every assessment
pub const CLINICAL_RATIONALE: &str = "Internal feedback and external snippets indicate scope for differentiation via formulation, dosing regimen or population targeting (e.g., elderly, diabetic neuropathy).";

/// Patient population the innovation hypothesis targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Population {
    Elderly,
    HighRisk,
}

impl Population {
    /// Elderly if any statement mentions "elderly" (case-insensitive).
    ///
    /// Evaluated once over the final, deduplicated list.
    pub fn for_needs<I, S>(needs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let elderly = needs.into_iter().any(|need| {
            need.as_ref()
                .to_lowercase()
                .contains(ELDERLY_POPULATION_KEYWORD)
        });
        if elderly {
            Population::Elderly
        } else {
            Population::HighRisk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Population::Elderly => "elderly patients",
            Population::HighRisk => "high-risk patients",
        }
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn innovation_hypothesis(molecule: &str, indication: &str, population: Population) -> String {
    format!(
        "Develop a differentiated formulation of {} for {}, focusing on {} and aiming to reduce side effects while improving adherence.",
        molecule, indication, population
    )
}
