// GET / and POST /evaluate — the server-rendered upload form and results page.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::{read_submission, run_evaluation, Outcome};
use crate::web::{page, AppState};

pub async fn index() -> Html<String> {
    Html(page::render_form(None, ""))
}

/// POST /evaluate — rank the uploaded resumes and render the report page.
///
/// Validation problems re-render the form with a warning and the job
/// description the user typed.
pub async fn evaluate_form(State(state): State<AppState>, multipart: Multipart) -> Response {
    let submission = match read_submission(multipart).await {
        Ok(submission) => submission,
        Err(e) => {
            let warning = format!("The upload could not be read: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Html(page::render_form(Some(&warning), "")),
            )
                .into_response();
        }
    };
    let job_description = submission.job_description.clone();

    match run_evaluation(&state, submission).await {
        Outcome::Ranked(report) => Html(page::render_report(&report, &job_description)).into_response(),
        Outcome::Invalid(invalid) => {
            Html(page::render_form(Some(&invalid.to_string()), &job_description)).into_response()
        }
        Outcome::Failed(e) => {
            let warning = format!("Evaluation failed: {e:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(page::render_form(Some(&warning), &job_description)),
            )
                .into_response()
        }
    }
}
