//! Keyword triggers for unmet-need detection
//!
//! Matching is plain substring containment on lower-cased text. Stems such
//! as "diabet" are intentional: they catch "diabetes" and "diabetic" alike.

/// CNS side-effect mentions in field feedback
pub const DIZZINESS_KEYWORDS: &[&str] = &["dizziness"];

/// Regimen adherence mentions in field feedback
pub const ADHERENCE_KEYWORDS: &[&str] = &["adherence"];

/// Elderly population mentions in field feedback
pub const ELDERLY_KEYWORDS: &[&str] = &["elderly"];

/// Diabetic population mentions in field feedback
pub const DIABETIC_KEYWORDS: &[&str] = &["diabet"];

/// Sedation complaints in patient forum highlights
pub const SEDATION_KEYWORDS: &[&str] = &["sleepy", "sedation"];

/// Keyword that steers the hypothesis towards the elderly population
pub const ELDERLY_POPULATION_KEYWORD: &str = "elderly";

/// True if any keyword occurs in `text_lower`.
///
/// `text_lower` must already be lower-cased; keywords are lower-cased here,
/// so custom triggers may use any case.
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| text_lower.contains(keyword.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any_substring() {
        assert!(contains_any("history of diabetes", DIABETIC_KEYWORDS));
        assert!(contains_any("diabetic neuropathy", DIABETIC_KEYWORDS));
        assert!(!contains_any("no relevant mention", DIABETIC_KEYWORDS));
    }

    #[test]
    fn test_contains_any_either_keyword() {
        assert!(contains_any("felt sleepy all day", SEDATION_KEYWORDS));
        assert!(contains_any("less sedation at night", SEDATION_KEYWORDS));
        assert!(!contains_any("slept well", SEDATION_KEYWORDS));
    }

    #[test]
    fn test_contains_any_mixed_case_keyword() {
        assert!(contains_any("nausea after titration", &["Nausea"]));
        assert!(contains_any("qd dosing preferred", &["QD"]));
    }

    #[test]
    fn test_contains_any_empty_keywords() {
        assert!(!contains_any("anything", &[]));
    }
}
