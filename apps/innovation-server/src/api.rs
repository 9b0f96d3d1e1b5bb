//! API handlers for the innovation server
//!
//! Provides REST endpoints for:
//! - Innovation searches (master agent run + KPI summary)
//! - Report generation (JSON with preview and base64 PDF)
//! - Report downloads (text and PDF attachments)

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use report_engine::{report_file_name, text_preview, LayoutStats, PREVIEW_CHARS};
use serde::Serialize;
use shared_types::{KpiCard, ReportPayload, SearchQuery};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "innovation-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub query: SearchQuery,
    pub kpis: Vec<KpiCard>,
    pub payload: ReportPayload,
}

/// Handler: POST /api/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Result<Json<SearchResponse>, ServerError> {
    let query = query.normalized()?;
    let run_id = Uuid::new_v4();
    info!("Search {}: molecule={}", run_id, query.molecule);

    let payload = state.master.run(&query);
    let kpis = payload.kpis();
    debug!("Search {} produced {} unmet needs", run_id, payload.unmet_needs.len());

    Ok(Json(SearchResponse {
        success: true,
        run_id,
        generated_at: Utc::now(),
        query,
        kpis,
        payload,
    }))
}

/// Download names for both renditions
#[derive(Serialize)]
pub struct ReportFileNames {
    pub text: String,
    pub pdf: String,
}

/// Report response
#[derive(Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub file_names: ReportFileNames,
    /// Full report text
    pub text: String,
    /// First characters of the report text
    pub preview: String,
    /// Base64-encoded PDF
    pub pdf_base64: String,
    pub layout: LayoutStats,
}

/// Handler: POST /api/report
///
/// The body is a report payload; omitted sections render as placeholders.
pub async fn handle_report(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<ReportResponse>, ServerError> {
    let payload = ReportPayload::from_value(body)?;
    info!("Report request: molecule={}", payload.molecule);

    let artifacts = state.generator.generate(&payload)?;
    let text = String::from_utf8_lossy(&artifacts.text).into_owned();

    Ok(Json(ReportResponse {
        success: true,
        file_names: ReportFileNames {
            text: report_file_name(&payload.molecule, &payload.primary_indication, "txt"),
            pdf: report_file_name(&payload.molecule, &payload.primary_indication, "pdf"),
        },
        preview: text_preview(&text, PREVIEW_CHARS),
        text,
        pdf_base64: STANDARD.encode(&artifacts.pdf),
        layout: artifacts.stats,
    }))
}

/// Handler: POST /api/report/text
pub async fn handle_report_text(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ServerError> {
    let payload = ReportPayload::from_value(body)?;
    let text = state.generator.generate_text_report(&payload);
    let file_name = report_file_name(&payload.molecule, &payload.primary_indication, "txt");

    Ok(attachment("text/plain; charset=utf-8", &file_name, text.into_bytes()))
}

/// Handler: POST /api/report/pdf
pub async fn handle_report_pdf(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ServerError> {
    let payload = ReportPayload::from_value(body)?;
    let pdf = state.generator.generate_pdf_report(&payload)?;
    let file_name = report_file_name(&payload.molecule, &payload.primary_indication, "pdf");

    Ok(attachment("application/pdf", &file_name, pdf))
}

fn attachment(content_type: &str, file_name: &str, body: Vec<u8>) -> Response {
    debug!("Serving {} ({} bytes)", file_name, body.len());
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response()
}
