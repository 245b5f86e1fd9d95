// Request handlers, plus the multipart parsing and evaluation runner shared by
// the HTML form and the JSON API.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::multipart::{Multipart, MultipartError};
use tracing::{debug, error};

use crate::pipeline::{evaluate, validate, Upload, ValidationError};
use crate::report::Report;
use crate::web::AppState;

pub mod api;
pub mod download;
pub mod form;

/// Multipart field carrying the job description text.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
/// Multipart field carrying resume files. May repeat.
pub const RESUMES_FIELD: &str = "resumes";

/// The parsed contents of one evaluation request.
#[derive(Debug, Default)]
pub struct Submission {
    pub job_description: String,
    pub uploads: Vec<Upload>,
}

/// Read the evaluation form out of a multipart body. Unknown fields are
/// ignored, as is the empty file part browsers send when nothing was picked.
pub async fn read_submission(mut multipart: Multipart) -> Result<Submission, MultipartError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JOB_DESCRIPTION_FIELD => {
                submission.job_description = field.text().await?;
            }
            RESUMES_FIELD => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                if filename.is_empty() && bytes.is_empty() {
                    continue;
                }
                submission.uploads.push(Upload::new(filename, bytes.to_vec()));
            }
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(submission)
}

/// How a submission ended.
pub enum Outcome {
    Ranked(Report),
    Invalid(ValidationError),
    Failed(anyhow::Error),
}

/// Validate, evaluate, and export one submission, recording the new
/// spreadsheet as the latest download.
pub async fn run_evaluation(state: &AppState, submission: Submission) -> Outcome {
    if let Err(invalid) = validate(&submission.job_description, &submission.uploads) {
        return Outcome::Invalid(invalid);
    }

    let mut latest = state.latest_export.lock().await;
    let ctx = Arc::clone(&state.ctx);

    let joined = tokio::task::spawn_blocking(move || -> Result<(Report, PathBuf)> {
        let report = evaluate(&ctx, &submission.job_description, &submission.uploads)?;
        let path = ctx.export(&report)?;
        Ok((report, path))
    })
    .await;

    match joined {
        Ok(Ok((report, path))) => {
            *latest = Some(path);
            Outcome::Ranked(report)
        }
        Ok(Err(e)) => match e.downcast_ref::<ValidationError>() {
            Some(invalid) => Outcome::Invalid(invalid.clone()),
            None => {
                error!(error = %e, "Evaluation failed");
                Outcome::Failed(e)
            }
        },
        Err(e) => {
            error!(error = %e, "Evaluation task panicked");
            Outcome::Failed(anyhow::anyhow!("Evaluation task failed: {e}"))
        }
    }
}
