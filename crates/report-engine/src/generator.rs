//! Report generator tying composition, layout and PDF output together

use serde::Serialize;
use shared_types::ReportPayload;

use crate::compose::compose;
use crate::config::RenderConfig;
use crate::error::ReportError;
use crate::layout::{paginate, PageLayout};
use crate::metrics::HelveticaMetrics;
use crate::pdf::render_pdf;

/// Summary of how the report fit on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutStats {
    pub lines_drawn: usize,
    pub truncated: bool,
}

impl From<&PageLayout> for LayoutStats {
    fn from(layout: &PageLayout) -> Self {
        Self {
            lines_drawn: layout.text_line_count(),
            truncated: layout.truncated,
        }
    }
}

/// Text and PDF renditions of one report
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    /// UTF-8 report text
    pub text: Vec<u8>,
    pub pdf: Vec<u8>,
    pub stats: LayoutStats,
}

#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    config: RenderConfig,
}

impl ReportGenerator {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn generate_text_report(&self, payload: &ReportPayload) -> String {
        compose(payload).to_text()
    }

    /// Lay out the report onto the configured canvas
    pub fn layout(&self, payload: &ReportPayload) -> PageLayout {
        let metrics = HelveticaMetrics::new(self.config.font_size);
        paginate(&compose(payload), &self.config.canvas, &metrics)
    }

    pub fn generate_pdf_report(&self, payload: &ReportPayload) -> Result<Vec<u8>, ReportError> {
        let layout = self.layout(payload);
        self.render(&layout)
    }

    /// Produce both renditions from a single composition
    pub fn generate(&self, payload: &ReportPayload) -> Result<ReportArtifacts, ReportError> {
        let composed = compose(payload);
        let metrics = HelveticaMetrics::new(self.config.font_size);
        let layout = paginate(&composed, &self.config.canvas, &metrics);
        let pdf = self.render(&layout)?;
        let stats = LayoutStats::from(&layout);

        tracing::info!(
            "Generated report for {}: {} lines drawn{}",
            payload.molecule,
            stats.lines_drawn,
            if stats.truncated { " (truncated)" } else { "" }
        );

        Ok(ReportArtifacts {
            text: composed.to_text().into_bytes(),
            pdf,
            stats,
        })
    }

    fn render(&self, layout: &PageLayout) -> Result<Vec<u8>, ReportError> {
        render_pdf(
            layout,
            &self.config.canvas,
            self.config.font_size,
            self.config.dpi,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Canvas;
    use pretty_assertions::assert_eq;

    fn payload() -> ReportPayload {
        ReportPayload {
            molecule: "pregabalin".to_string(),
            primary_indication: "neuropathic pain".to_string(),
            target_geography: "US".to_string(),
            unmet_needs: vec!["Reduce dizziness / CNS side effects.".to_string()],
            innovation_hypothesis: "Develop a differentiated formulation.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_artifacts_share_composition() {
        let generator = ReportGenerator::default();
        let artifacts = generator.generate(&payload()).unwrap();

        assert_eq!(
            String::from_utf8(artifacts.text).unwrap(),
            generator.generate_text_report(&payload())
        );
        assert!(artifacts.pdf.starts_with(b"%PDF"));
        assert!(!artifacts.stats.truncated);
        assert_eq!(artifacts.stats.lines_drawn, 24);
    }

    #[test]
    fn test_pdf_has_one_page() {
        let pdf = ReportGenerator::default()
            .generate_pdf_report(&payload())
            .unwrap();
        let doc = lopdf::Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_long_payload_is_truncated() {
        let mut long = payload();
        long.unmet_needs = (0..200).map(|i| format!("Need number {}", i)).collect();

        let layout = ReportGenerator::default().layout(&long);
        assert!(layout.truncated);
        // (1754 - 2 * 40) / 22 lines fit
        assert_eq!(layout.text_line_count(), 76);
    }

    #[test]
    fn test_custom_canvas_is_used() {
        let config = RenderConfig {
            canvas: Canvas {
                height: 200.0,
                ..Canvas::default()
            },
            ..RenderConfig::default()
        };
        let layout = ReportGenerator::new(config).layout(&payload());
        assert!(layout.truncated);
        assert_eq!(layout.text_line_count(), 5);
    }
}
