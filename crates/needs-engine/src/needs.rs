use std::fmt;

use serde::{Serialize, Serializer};

/// Canonical unmet-need statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeedStatement {
    ReduceDizziness,
    ImproveAdherence,
    ElderlyRegimen,
    DiabeticTargeting,
    MinimizeSedation,
}

impl NeedStatement {
    pub fn as_str(&self) -> &'static str {
        match self {
            NeedStatement::ReduceDizziness => "Reduce dizziness / CNS side effects.",
            NeedStatement::ImproveAdherence => "Improve adherence in elderly / complex regimens.",
            NeedStatement::ElderlyRegimen => "Design regimen better suited to elderly patients.",
            NeedStatement::DiabeticTargeting => {
                "Target neuropathic pain in diabetic patients more specifically."
            }
            NeedStatement::MinimizeSedation => {
                "Minimize daytime sedation while maintaining pain relief."
            }
        }
    }
}

impl fmt::Display for NeedStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NeedStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ordered, duplicate-free list of need statements
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnmetNeeds(Vec<NeedStatement>);

impl UnmetNeeds {
    /// Keep the first occurrence of each statement, in input order
    pub fn from_matches<I: IntoIterator<Item = NeedStatement>>(matches: I) -> Self {
        let mut needs = Vec::new();
        for need in matches {
            if !needs.contains(&need) {
                needs.push(need);
            }
        }
        Self(needs)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NeedStatement> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[NeedStatement] {
        &self.0
    }

    /// Statement texts, as stored in a report payload
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|need| need.as_str().to_string()).collect()
    }
}

impl<'a> IntoIterator for &'a UnmetNeeds {
    type Item = &'a NeedStatement;
    type IntoIter = std::slice::Iter<'a, NeedStatement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_matches_keeps_first_occurrence() {
        let needs = UnmetNeeds::from_matches([
            NeedStatement::ImproveAdherence,
            NeedStatement::ReduceDizziness,
            NeedStatement::ImproveAdherence,
            NeedStatement::MinimizeSedation,
            NeedStatement::ReduceDizziness,
        ]);
        assert_eq!(
            needs.as_slice(),
            &[
                NeedStatement::ImproveAdherence,
                NeedStatement::ReduceDizziness,
                NeedStatement::MinimizeSedation,
            ]
        );
    }

    #[test]
    fn test_serializes_as_statement_text() {
        let needs = UnmetNeeds::from_matches([NeedStatement::MinimizeSedation]);
        let json = serde_json::to_string(&needs).unwrap();
        assert_eq!(
            json,
            r#"["Minimize daytime sedation while maintaining pain relief."]"#
        );
    }
}
