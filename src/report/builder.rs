// Report builder — joins scores with filenames, rates and ranks each resume,
// and works out which job description keywords each resume is missing.

use anyhow::Result;
use chrono::Local;

use super::models::{
    Rating, Report, Resume, ScoreRecord, SUGGEST_MATCHES_WELL, SUGGEST_MORE_KEYWORDS,
};
use crate::text::Normalizer;

/// Maximum number of missing keywords listed per resume.
pub const MAX_MISSING_KEYWORDS: usize = 10;

/// Build the ranked report.
///
/// `scores` are cosine similarities in [0.0, 1.0], one per resume and in the
/// same order. Rows come back sorted by match percentage, highest first; ties
/// keep upload order.
pub fn build_report(
    normalizer: &Normalizer,
    job_description: &str,
    resumes: &[Resume],
    scores: &[f64],
) -> Result<Report> {
    if resumes.len() != scores.len() {
        anyhow::bail!(
            "Got {} scores for {} resumes",
            scores.len(),
            resumes.len()
        );
    }

    let jd_keywords = normalizer.keywords(job_description);

    let mut records: Vec<ScoreRecord> = resumes
        .iter()
        .zip(scores)
        .map(|(resume, &score)| {
            let resume_keywords = normalizer.keywords(&resume.text);
            let missing_keywords: Vec<String> = jd_keywords
                .difference(&resume_keywords)
                .take(MAX_MISSING_KEYWORDS)
                .cloned()
                .collect();

            let match_pct = to_percentage(score);
            let suggestion = if match_pct < 80.0 {
                SUGGEST_MORE_KEYWORDS
            } else {
                SUGGEST_MATCHES_WELL
            };

            ScoreRecord {
                filename: resume.filename.clone(),
                match_pct,
                rating: Rating::from_percentage(match_pct),
                rank: 0,
                missing_keywords,
                suggestion: suggestion.to_string(),
                extraction_error: resume.extraction_error.clone(),
            }
        })
        .collect();

    // sort_by is stable, so equal scores keep upload order
    records.sort_by(|a, b| {
        b.match_pct
            .partial_cmp(&a.match_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (i, record) in records.iter_mut().enumerate() {
        record.rank = i + 1;
    }

    Ok(Report {
        records,
        warnings: Vec::new(),
        generated_at: Local::now(),
    })
}

/// Scale a similarity to a percentage with two decimals, clamped to 0-100.
pub fn to_percentage(score: f64) -> f64 {
    if !score.is_finite() {
        return 0.0;
    }
    // + 0.0 turns a -0.0 into 0.0
    ((score * 100.0 * 100.0).round() / 100.0).clamp(0.0, 100.0) + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::with_stop_words(["with", "and", "the"]).unwrap()
    }

    #[test]
    fn test_to_percentage_rounds_two_decimals() {
        assert_eq!(to_percentage(0.123456), 12.35);
        assert_eq!(to_percentage(1.0), 100.0);
        assert_eq!(to_percentage(0.0), 0.0);
        assert_eq!(to_percentage(1.0000000002), 100.0);
        assert_eq!(to_percentage(f64::NAN), 0.0);
    }

    #[test]
    fn test_zero_percentage_is_positive_zero() {
        for score in [-0.0, 0.0, -0.000_01] {
            let pct = to_percentage(score);
            assert_eq!(pct, 0.0);
            assert!(!pct.is_sign_negative(), "{score} gave {pct}");
            assert_eq!(format!("{pct:.2}"), "0.00");
        }
    }

    #[test]
    fn test_ties_keep_upload_order() {
        let resumes = vec![
            Resume::new("a.pdf", ""),
            Resume::new("b.pdf", ""),
            Resume::new("c.pdf", ""),
        ];
        let report = build_report(&normalizer(), "rust", &resumes, &[0.5, 0.9, 0.5]).unwrap();
        let order: Vec<&str> = report.records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(order, vec!["b.pdf", "a.pdf", "c.pdf"]);
        let ranks: Vec<usize> = report.records.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_keywords_capped_and_sorted() {
        let jd = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let resumes = vec![Resume::new("r.pdf", "bravo")];
        let report = build_report(&normalizer(), jd, &resumes, &[0.1]).unwrap();
        let missing = &report.records[0].missing_keywords;
        assert_eq!(missing.len(), MAX_MISSING_KEYWORDS);
        assert_eq!(missing[0], "alpha");
        assert_eq!(missing[1], "charlie");
        assert!(!missing.contains(&"bravo".to_string()));
    }

    #[test]
    fn test_suggestion_follows_threshold() {
        let resumes = vec![Resume::new("a.pdf", ""), Resume::new("b.pdf", "")];
        let report = build_report(&normalizer(), "rust", &resumes, &[0.8, 0.7999]).unwrap();
        assert_eq!(report.records[0].suggestion, SUGGEST_MATCHES_WELL);
        assert_eq!(report.records[0].rating, Rating::Excellent);
        assert_eq!(report.records[1].suggestion, SUGGEST_MORE_KEYWORDS);
        assert_eq!(report.records[1].rating, Rating::Good);
    }

    #[test]
    fn test_length_mismatch_is_error() {
        let resumes = vec![Resume::new("a.pdf", "")];
        assert!(build_report(&normalizer(), "rust", &resumes, &[]).is_err());
    }
}
