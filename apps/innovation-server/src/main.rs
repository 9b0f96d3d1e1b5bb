//! Innovation Explorer Server
//!
//! Serves the mock multi-agent pharma research workflow over HTTP:
//!
//! - `POST /api/search`: run the master agent for a molecule
//! - `POST /api/report`: compose a report (text preview and base64 PDF)
//! - `POST /api/report/text`, `POST /api/report/pdf`: file downloads
//!
//! Every request builds its own payload and layout; the agents and render
//! settings are shared read-only through [`AppState`].

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use market_agents::{build_master_agent, MasterAgent};
use report_engine::{RenderConfig, ReportGenerator};
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod error;

use api::{
    handle_health, handle_report, handle_report_pdf, handle_report_text, handle_search,
};

/// Command-line arguments for the innovation server
#[derive(Parser, Debug)]
#[command(name = "innovation-server")]
#[command(about = "Mock pharma innovation explorer API")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Render settings (TOML); defaults to A4 at 150 DPI
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub master: Arc<MasterAgent>,
    pub generator: Arc<ReportGenerator>,
}

impl AppState {
    pub fn new(master: MasterAgent, generator: ReportGenerator) -> Self {
        Self {
            master: Arc::new(master),
            generator: Arc::new(generator),
        }
    }
}

/// Requests allowed in a burst: twice the per-second rate
pub fn burst_size(rate_limit: u32) -> u32 {
    rate_limit.saturating_mul(2)
}

/// API routes without transport middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/search", post(handle_search))
        .route("/api/report", post(handle_report))
        .route("/api/report/text", post(handle_report_text))
        .route("/api/report/pdf", post(handle_report_pdf))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting innovation server on {}:{}", args.host, args.port);

    let render_config = match &args.config {
        Some(path) => RenderConfig::from_file(path)?,
        None => RenderConfig::default(),
    };

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(burst_size(args.rate_limit))
            .finish()
            .ok_or_else(|| anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    let state = AppState::new(build_master_agent(), ReportGenerator::new(render_config));

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        );

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", args.host, args.port))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    // Peer addresses are needed by the per-IP rate limiter
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
