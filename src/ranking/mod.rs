// Similarity ranking — TF-IDF vectors and cosine scoring of resumes against
// the job description.

pub mod similarity;
pub mod tfidf;
pub mod traits;
