use crate::needs::NeedStatement;
use crate::patterns::{
    contains_any, ADHERENCE_KEYWORDS, DIABETIC_KEYWORDS, DIZZINESS_KEYWORDS, ELDERLY_KEYWORDS,
    SEDATION_KEYWORDS,
};

/// A keyword rule: any trigger present yields the statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeedRule {
    pub triggers: &'static [&'static str],
    pub need: NeedStatement,
}

impl NeedRule {
    pub const fn new(triggers: &'static [&'static str], need: NeedStatement) -> Self {
        Self { triggers, need }
    }

    /// `text_lower` must already be lower-cased; triggers match in any case
    pub fn fires(&self, text_lower: &str) -> bool {
        contains_any(text_lower, self.triggers)
    }
}

/// Rules applied to internal field feedback, in evaluation order
pub const INTERNAL_RULES: &[NeedRule] = &[
    NeedRule::new(DIZZINESS_KEYWORDS, NeedStatement::ReduceDizziness),
    NeedRule::new(ADHERENCE_KEYWORDS, NeedStatement::ImproveAdherence),
    NeedRule::new(ELDERLY_KEYWORDS, NeedStatement::ElderlyRegimen),
    NeedRule::new(DIABETIC_KEYWORDS, NeedStatement::DiabeticTargeting),
];

/// Rules applied to external patient forum highlights
pub const EXTERNAL_RULES: &[NeedRule] = &[NeedRule::new(
    SEDATION_KEYWORDS,
    NeedStatement::MinimizeSedation,
)];

/// Scan texts in order, testing every rule independently against each text.
///
/// Returns every hit, duplicates included.
pub fn scan<S: AsRef<str>>(texts: &[S], rules: &[NeedRule]) -> Vec<NeedStatement> {
    let mut hits = Vec::new();
    for text in texts {
        let text_lower = text.as_ref().to_lowercase();
        hits.extend(
            rules
                .iter()
                .filter(|rule| rule.fires(&text_lower))
                .map(|rule| rule.need),
        );
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_text_triggers_multiple_rules() {
        let hits = scan(
            &["Adherence issues and dizziness in elderly patients"],
            INTERNAL_RULES,
        );
        assert_eq!(
            hits,
            vec![
                NeedStatement::ReduceDizziness,
                NeedStatement::ImproveAdherence,
                NeedStatement::ElderlyRegimen,
            ]
        );
    }

    #[test]
    fn test_scan_is_case_insensitive() {
        let hits = scan(&["DIABETIC NEUROPATHY subgroup"], INTERNAL_RULES);
        assert_eq!(hits, vec![NeedStatement::DiabeticTargeting]);
    }

    #[test]
    fn test_scan_keeps_duplicates() {
        let hits = scan(&["sleepy", "sedation noted"], EXTERNAL_RULES);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_external_rules_ignore_internal_keywords() {
        let hits = scan(&["dizziness in elderly"], EXTERNAL_RULES);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_scan_empty_input() {
        let texts: [&str; 0] = [];
        assert!(scan(&texts, INTERNAL_RULES).is_empty());
    }
}
