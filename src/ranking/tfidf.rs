// TF-IDF vectorization over a single evaluation's corpus.
//
// The corpus is the normalized job description followed by every normalized
// resume. The vocabulary is fitted fresh for each evaluation; nothing is
// persisted between runs.
//
// Weighting follows the usual smoothed scheme:
//
//   idf(t) = ln((1 + n) / (1 + df(t))) + 1
//   w(t, d) = count(t, d) * idf(t), then L2-normalized per document
//
// so a term that appears in every document still carries weight 1 * tf, and
// an empty document maps to the zero vector instead of an error.

use std::collections::{BTreeMap, HashMap};

use anyhow::Result;
use tracing::{debug, warn};

use super::similarity::cosine_from_weights;
use super::traits::SimilarityScorer;
use crate::text::Normalizer;

/// Sparse term -> weight vector for one document.
pub type TermWeights = HashMap<String, f64>;

/// A fitted TF-IDF model: the corpus vocabulary with its IDF weights, plus one
/// L2-normalized vector per input document.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    /// term -> inverse document frequency, in lexicographic term order
    pub idf: BTreeMap<String, f64>,
    /// One vector per document, in corpus order
    pub vectors: Vec<TermWeights>,
}

impl TfIdfMatrix {
    /// Fit the vocabulary on `documents` and transform each of them.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> Self {
        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| term_counts(doc.as_ref()))
            .collect();

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in &counts {
            for term in doc.keys() {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let idf: BTreeMap<String, f64> = document_frequency
            .into_iter()
            .map(|(term, df)| {
                let weight = ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0;
                (term, weight)
            })
            .collect();

        let vectors = counts
            .into_iter()
            .map(|doc| {
                let mut weights: TermWeights = doc
                    .into_iter()
                    .map(|(term, count)| {
                        let w = count as f64 * idf.get(&term).copied().unwrap_or(0.0);
                        (term, w)
                    })
                    .collect();
                l2_normalize(&mut weights);
                weights
            })
            .collect();

        Self { idf, vectors }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.idf.len()
    }
}

/// Count analyzer terms in a document: runs of word characters at least two
/// characters long.
fn term_counts(document: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in document
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
    {
        *counts.entry(term.to_lowercase()).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(weights: &mut TermWeights) {
    let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for w in weights.values_mut() {
            *w /= norm;
        }
    }
}

/// TF-IDF + cosine similarity scorer — the default ranker.
///
/// Normalizes the job description and every resume, fits TF-IDF over the
/// combined corpus, and scores each resume by the cosine between its vector and
/// the job description's.
pub struct TfIdfScorer<'a> {
    normalizer: &'a Normalizer,
}

impl<'a> TfIdfScorer<'a> {
    pub fn new(normalizer: &'a Normalizer) -> Self {
        Self { normalizer }
    }
}

impl SimilarityScorer for TfIdfScorer<'_> {
    fn score(&self, job_description: &str, resumes: &[String]) -> Result<Vec<f64>> {
        let mut corpus = Vec::with_capacity(resumes.len() + 1);
        corpus.push(self.normalizer.normalize(job_description));
        corpus.extend(resumes.iter().map(|r| self.normalizer.normalize(r)));

        let matrix = TfIdfMatrix::fit_transform(&corpus);

        if matrix.vocabulary_len() == 0 {
            warn!(
                documents = corpus.len(),
                "Empty TF-IDF vocabulary after normalization, every resume scores 0"
            );
            return Ok(vec![0.0; resumes.len()]);
        }

        debug!(
            documents = corpus.len(),
            vocabulary = matrix.vocabulary_len(),
            "Fitted TF-IDF corpus"
        );

        let (job_vector, resume_vectors) = match matrix.vectors.split_first() {
            Some(split) => split,
            None => return Ok(Vec::new()),
        };

        Ok(resume_vectors
            .iter()
            .map(|v| cosine_from_weights(job_vector, v).clamp(0.0, 1.0))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idf_smoothing() {
        let matrix = TfIdfMatrix::fit_transform(&["rust python", "rust"]);
        // rust appears in both documents: ln(3/3) + 1 = 1
        assert!((matrix.idf["rust"] - 1.0).abs() < 1e-12);
        // python appears in one: ln(3/2) + 1
        assert!((matrix.idf["python"] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let matrix = TfIdfMatrix::fit_transform(&["rust rust python", "go java", ""]);
        for v in &matrix.vectors[..2] {
            let norm: f64 = v.values().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9, "norm was {norm}");
        }
        assert!(matrix.vectors[2].is_empty());
    }

    #[test]
    fn test_single_character_terms_are_ignored() {
        let matrix = TfIdfMatrix::fit_transform(&["c r go"]);
        assert_eq!(matrix.vocabulary_len(), 1);
        assert!(matrix.idf.contains_key("go"));
    }

    #[test]
    fn test_all_empty_corpus_scores_zero() {
        let normalizer = Normalizer::with_stop_words(["the", "and"]).unwrap();
        let scorer = TfIdfScorer::new(&normalizer);
        let scores = scorer
            .score("the and", &["".to_string(), "the".to_string()])
            .unwrap();
        assert_eq!(scores, vec![0.0, 0.0]);
    }

    #[test]
    fn test_identical_document_scores_one() {
        let normalizer = Normalizer::with_stop_words(["with"]).unwrap();
        let scorer = TfIdfScorer::new(&normalizer);
        let jd = "Python developer with Django experience";
        let scores = scorer.score(jd, &[jd.to_string()]).unwrap();
        assert!((scores[0] - 1.0).abs() < 1e-9);
    }
}
