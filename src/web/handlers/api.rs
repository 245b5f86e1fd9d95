// POST /api/evaluate — same input as the form, JSON report out.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::{read_submission, run_evaluation, Outcome};
use crate::web::{api_error, AppState};

pub async fn evaluate_json(State(state): State<AppState>, multipart: Multipart) -> Response {
    let submission = match read_submission(multipart).await {
        Ok(submission) => submission,
        Err(e) => return api_error(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match run_evaluation(&state, submission).await {
        Outcome::Ranked(report) => Json(report).into_response(),
        Outcome::Invalid(invalid) => {
            api_error(StatusCode::UNPROCESSABLE_ENTITY, &invalid.to_string())
        }
        Outcome::Failed(e) => api_error(StatusCode::INTERNAL_SERVER_ERROR, &format!("{e:#}")),
    }
}
