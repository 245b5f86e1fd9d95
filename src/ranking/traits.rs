// Similarity scorer trait — swap-ready abstraction.
//
// The default implementation is TF-IDF with cosine similarity. Anything that
// can turn a job description and a batch of resumes into per-resume scores in
// [0.0, 1.0] can stand in for it.

use anyhow::Result;

/// Trait for scoring a batch of resume texts against one job description.
pub trait SimilarityScorer {
    /// Return one score per resume, in input order, each in [0.0, 1.0].
    fn score(&self, job_description: &str, resumes: &[String]) -> Result<Vec<f64>>;
}
