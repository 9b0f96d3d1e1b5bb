use shared_types::{ClinicalTrialsLandscape, NotableTrial, Number, PhaseDistribution, SearchQuery};

use crate::agent::WorkerAgent;

const PHASE_COUNTS: &[(&str, u32)] = &[
    ("Phase I", 6),
    ("Phase II", 12),
    ("Phase III", 8),
    ("Phase IV", 5),
];

const ACTIVE_TRIALS: u32 = 14;

/// Sample registry counts, identical for every molecule
#[derive(Debug, Clone, Copy, Default)]
pub struct ClinicalTrialsAgent;

impl WorkerAgent for ClinicalTrialsAgent {
    type Output = ClinicalTrialsLandscape;

    fn name(&self) -> &'static str {
        "clinical-trials"
    }

    fn run(&self, _query: &SearchQuery) -> ClinicalTrialsLandscape {
        let phase_distribution: PhaseDistribution = PHASE_COUNTS.iter().copied().collect();
        let total: u32 = PHASE_COUNTS.iter().map(|&(_, count)| count).sum();

        let notable_trials = vec![
            NotableTrial {
                id: "NCT00000001".to_string(),
                phase: "Phase III".to_string(),
                status: "Active".to_string(),
            },
            NotableTrial {
                id: "NCT00000002".to_string(),
                phase: "Phase II".to_string(),
                status: "Completed".to_string(),
            },
        ];

        ClinicalTrialsLandscape {
            total_trials: Some(Number::from(total)),
            active_trials: Some(Number::from(ACTIVE_TRIALS)),
            phase_distribution: Some(phase_distribution),
            comments: "Mock clinical landscape derived from sample registry counts.".to_string(),
            notable_trials,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_phases() {
        let query = SearchQuery::new("pregabalin", "", "US").unwrap();
        let trials = ClinicalTrialsAgent.run(&query);
        assert_eq!(trials.total_trials, Some(Number::from(31)));
        assert_eq!(trials.active_trials, Some(Number::from(14)));
        assert_eq!(
            trials.phase_summary().as_deref(),
            Some("Phase I: 6, Phase II: 12, Phase III: 8, Phase IV: 5")
        );
        assert_eq!(trials.notable_trials.len(), 2);
    }
}
