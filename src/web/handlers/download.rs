// GET /download — the spreadsheet from the most recent evaluation.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::output::xlsx::DOWNLOAD_FILENAME;
use crate::web::{api_error, AppState};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub async fn download_latest(State(state): State<AppState>) -> Response {
    // Read under the lock so an in-flight evaluation finishes first.
    let latest = state.latest_export.lock().await;
    let Some(path) = latest.as_ref() else {
        return api_error(StatusCode::NOT_FOUND, "No ranking has been generated yet.");
    };

    match tokio::fs::read(path).await {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read latest spreadsheet");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "The latest spreadsheet could not be read.",
            )
        }
    }
}
