//! Innovation report rendering
//!
//! Turns a [`shared_types::ReportPayload`] into a plain-text document and a
//! single-page PDF. The pipeline runs in three steps:
//! - [`compose`]: payload to ordered text lines
//! - [`paginate`]: greedy word wrap and single-page truncation
//! - [`render_pdf`]: draw instructions to PDF bytes using lopdf

pub mod compose;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod layout;
pub mod metrics;
pub mod pdf;

pub use compose::{compose, ComposedText};
pub use config::RenderConfig;
pub use error::ReportError;
pub use export::{report_file_name, text_preview, PREVIEW_CHARS};
pub use generator::{LayoutStats, ReportArtifacts, ReportGenerator};
pub use layout::{paginate, wrap_line, Canvas, DrawInstruction, DrawKind, PageLayout};
pub use metrics::{HelveticaMetrics, MonospaceMeasure, TextMeasure};
pub use pdf::render_pdf;
