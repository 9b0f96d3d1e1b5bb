//! Report text composition
//!
//! Serializes a payload into the fixed section order of the report. Missing
//! scalar values print as [`PLACEHOLDER`]; missing lists print nothing.

use shared_types::{or_placeholder, ReportPayload, PLACEHOLDER};

/// Final line of every report
pub const FOOTER: &str = "Generated by mock agents (offline demo).";

/// Ordered report lines with bullets and indentation applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedText {
    lines: Vec<String>,
}

impl ComposedText {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines after splitting any embedded newlines
    pub fn raw_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flat_map(|line| line.split('\n'))
    }

    /// The text document: lines joined with `\n`, no trailing newline
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Compose the report text for a payload
pub fn compose(payload: &ReportPayload) -> ComposedText {
    let mut lines = Vec::new();

    lines.push(format!(
        "Innovation Report: {} – {} ({})",
        payload.molecule, payload.primary_indication, payload.target_geography
    ));
    lines.push(String::new());

    lines.push("Unmet Needs:".to_string());
    lines.extend(payload.unmet_needs.iter().map(|need| format!("- {}", need)));
    lines.push(String::new());

    lines.push(format!("Clinical Rationale: {}", payload.clinical_rationale));
    lines.push(String::new());

    let market = &payload.market_overview;
    lines.push("Market Overview:".to_string());
    lines.push(format!(
        "- Market size (USD Mn): {}",
        or_placeholder(market.market_size_usd_mn.as_ref())
    ));
    lines.push(format!(
        "- CAGR (3-yr %): {}",
        or_placeholder(market.cagr_3yr_pct.as_ref())
    ));
    lines.push(format!("- Top year: {}", or_placeholder(market.top_year.as_ref())));
    lines.push(String::new());

    let exim = &payload.exim_overview;
    lines.push("Trade Overview:".to_string());
    lines.push(format!(
        "- API import dependency: {}",
        or_placeholder(exim.api_import_dependency.as_ref())
    ));
    lines.push(format!(
        "- Avg import price (USD/kg): {}",
        or_placeholder(exim.avg_import_price_per_kg_usd.as_ref())
    ));
    lines.push(String::new());

    let trials = &payload.clinical_trials_landscape;
    lines.push("Clinical Trials:".to_string());
    lines.push(format!(
        "- Total trials: {}",
        or_placeholder(trials.total_trials.as_ref())
    ));
    lines.push(format!(
        "- Active trials: {}",
        or_placeholder(trials.active_trials.as_ref())
    ));
    lines.push(format!(
        "- Phase distribution: {}",
        trials
            .phase_summary()
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    ));
    lines.push(String::new());

    let patents = &payload.patent_landscape;
    lines.push("Patent Landscape:".to_string());
    lines.push(format!(
        "- Core patent expiry: {}",
        or_placeholder(patents.core_patent_expiry.as_ref())
    ));
    lines.push(format!("- FTO risk: {}", or_placeholder(patents.fto_risk.as_ref())));
    lines.push(String::new());

    let internal = &payload.internal_insights;
    lines.push("Internal Insights:".to_string());
    lines.push(format!(
        "- Strategic priority match: {}",
        or_placeholder(internal.strategic_priorities_match.as_ref())
    ));
    lines.extend(
        internal
            .field_feedback
            .iter()
            .map(|note| format!("  • {}", note)),
    );
    lines.push(String::new());

    // Forum highlights stay in the payload but are not printed
    let web = &payload.web_insights;
    lines.push("Web Intelligence:".to_string());
    lines.extend(
        web.guideline_extracts
            .iter()
            .chain(web.recent_news.iter())
            .map(|item| format!("- {}", item)),
    );
    lines.push(String::new());

    lines.push("Innovation Hypothesis:".to_string());
    lines.push(payload.innovation_hypothesis.clone());
    lines.push(String::new());
    lines.push(FOOTER.to_string());

    ComposedText { lines }
}
