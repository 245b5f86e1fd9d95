// Web server — Axum-based upload form and JSON API.
//
// GET / serves the form, POST /evaluate renders the ranking as HTML, and
// POST /api/evaluate returns the same report as JSON. GET /download hands
// back the most recent spreadsheet.
//
// Evaluations are serialized: the mutex around the latest export path is
// held for the whole extract -> score -> export run, so a download never
// sees a half-written workbook and two submissions can't interleave.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::pipeline::RankerContext;

pub mod handlers;
pub mod page;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<RankerContext>,
    /// Path of the spreadsheet written by the last successful evaluation.
    pub latest_export: Arc<Mutex<Option<PathBuf>>>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(ctx: RankerContext, max_upload_bytes: usize) -> Self {
        Self {
            ctx: Arc::new(ctx),
            latest_export: Arc::new(Mutex::new(None)),
            max_upload_bytes,
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, ctx: RankerContext, port: u16, bind: &str) -> Result<()> {
    let state = AppState::new(ctx, config.max_upload_bytes());
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Shortlist listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::form::index))
        .route("/evaluate", post(handlers::form::evaluate_form))
        .route("/api/evaluate", post(handlers::api::evaluate_json))
        .route("/download", get(handlers::download::download_latest))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
