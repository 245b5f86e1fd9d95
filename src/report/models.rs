// Report data types.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Column headers, in output order, shared by every rendering of a report.
pub const COLUMNS: [&str; 6] = [
    "Filename",
    "Match %",
    "Rating",
    "Rank",
    "Missing Keywords",
    "Suggestions",
];

pub const SUGGEST_MORE_KEYWORDS: &str = "Add more job-specific keywords.";
pub const SUGGEST_MATCHES_WELL: &str = "Resume matches well.";

/// One uploaded resume: its filename and extracted text.
#[derive(Debug, Clone)]
pub struct Resume {
    pub filename: String,
    pub text: String,
    /// Set when extraction failed; `text` is empty in that case.
    pub extraction_error: Option<String>,
}

impl Resume {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
            extraction_error: None,
        }
    }

    /// A resume whose text could not be extracted. It still takes part in the
    /// ranking, with empty text.
    pub fn unreadable(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: String::new(),
            extraction_error: Some(error.into()),
        }
    }
}

/// Qualitative match rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Low,
    Good,
    Excellent,
}

impl Rating {
    /// Determine the rating from a match percentage (0-100).
    pub fn from_percentage(match_pct: f64) -> Self {
        match match_pct {
            p if p >= 80.0 => Rating::Excellent,
            p if p >= 50.0 => Rating::Good,
            _ => Rating::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Good => "Good",
            Rating::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the ranked report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub filename: String,
    /// Cosine similarity scaled to 0-100, rounded to two decimals
    pub match_pct: f64,
    pub rating: Rating,
    /// 1-based position after sorting by match percentage
    pub rank: usize,
    /// Up to 10 job description keywords absent from the resume, sorted
    pub missing_keywords: Vec<String>,
    pub suggestion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_error: Option<String>,
}

impl ScoreRecord {
    /// Missing keywords as a single comma-separated cell.
    pub fn missing_keywords_display(&self) -> String {
        self.missing_keywords.join(", ")
    }
}

/// The ranked result of one evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Rows in rank order
    pub records: Vec<ScoreRecord>,
    /// Run-level problems worth showing to the user (e.g. nothing scorable)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub generated_at: DateTime<Local>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows whose resume could not be read.
    pub fn unreadable(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records
            .iter()
            .filter(|r| r.extraction_error.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(Rating::from_percentage(100.0), Rating::Excellent);
        assert_eq!(Rating::from_percentage(80.0), Rating::Excellent);
        assert_eq!(Rating::from_percentage(79.99), Rating::Good);
        assert_eq!(Rating::from_percentage(50.0), Rating::Good);
        assert_eq!(Rating::from_percentage(49.99), Rating::Low);
        assert_eq!(Rating::from_percentage(0.0), Rating::Low);
    }

    #[test]
    fn test_unreadable_resume_has_empty_text() {
        let resume = Resume::unreadable("scan.pdf", "Not a readable PDF document");
        assert!(resume.text.is_empty());
        assert_eq!(
            resume.extraction_error.as_deref(),
            Some("Not a readable PDF document")
        );
    }
}
