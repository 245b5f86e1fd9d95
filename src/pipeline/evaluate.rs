use anyhow::Result;
use thiserror::Error;
use tracing::{info, warn};

use super::context::RankerContext;
use crate::ranking::tfidf::TfIdfScorer;
use crate::ranking::traits::SimilarityScorer;
use crate::report::{build_report, Report, Resume};

/// One uploaded file: the name it was uploaded under and its raw bytes.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

/// Input problems that stop an evaluation before any work is done. These are
/// shown to the user as warnings, not treated as failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload at least one resume.")]
    NoResumes,
    #[error("Please enter a job description.")]
    EmptyJobDescription,
}

/// Check the inputs of one evaluation.
pub fn validate(job_description: &str, uploads: &[Upload]) -> Result<(), ValidationError> {
    validate_inputs(job_description, uploads.len())
}

/// Same checks as `validate`, for callers that haven't loaded the files yet.
pub fn validate_inputs(job_description: &str, file_count: usize) -> Result<(), ValidationError> {
    if file_count == 0 {
        return Err(ValidationError::NoResumes);
    }
    if job_description.trim().is_empty() {
        return Err(ValidationError::EmptyJobDescription);
    }
    Ok(())
}

/// Run one evaluation: extract every upload, score it against the job
/// description, and return the ranked report.
///
/// Validation failures come back as a `ValidationError` inside the
/// `anyhow::Error`; callers that want to show them as warnings can
/// `downcast_ref` for it. A file that can't be read doesn't abort the batch: it
/// is ranked with empty text and its row carries the extraction error.
pub fn evaluate(
    ctx: &RankerContext,
    job_description: &str,
    uploads: &[Upload],
) -> Result<Report> {
    validate(job_description, uploads)?;

    let resumes: Vec<Resume> = uploads
        .iter()
        .map(|upload| extract_resume(ctx, upload))
        .collect();

    score_resumes(ctx, job_description, &resumes)
}

/// Score already-extracted resumes. Used directly by the CLI, which extracts
/// from disk with a progress bar.
pub fn score_resumes(
    ctx: &RankerContext,
    job_description: &str,
    resumes: &[Resume],
) -> Result<Report> {
    validate_inputs(job_description, resumes.len())?;

    let texts: Vec<String> = resumes.iter().map(|r| r.text.clone()).collect();
    let scorer = TfIdfScorer::new(&ctx.normalizer);
    let scores = scorer.score(job_description, &texts)?;

    let mut report = build_report(&ctx.normalizer, job_description, resumes, &scores)?;

    if scores.iter().all(|&s| s == 0.0) {
        report
            .warnings
            .push("No resume shares any keywords with the job description.".to_string());
    }
    let unreadable = report.unreadable().count();
    if unreadable > 0 {
        report.warnings.push(format!(
            "{unreadable} file(s) could not be read and were scored as empty."
        ));
    }

    info!(
        resumes = report.len(),
        unreadable,
        top_match = report.records.first().map(|r| r.match_pct).unwrap_or(0.0),
        "Evaluation complete"
    );

    Ok(report)
}

/// Extract one upload's text, recording (rather than propagating) failures.
pub fn extract_resume(ctx: &RankerContext, upload: &Upload) -> Resume {
    match ctx.extractor.extract(&upload.bytes) {
        Ok(text) => {
            if text.trim().is_empty() {
                warn!(file = %upload.filename, "No extractable text (scanned or image-only PDF?)");
            }
            Resume::new(upload.filename.clone(), text)
        }
        Err(e) => {
            warn!(file = %upload.filename, error = %e, "Failed to extract resume text");
            Resume::unreadable(upload.filename.clone(), format!("{e:#}"))
        }
    }
}
