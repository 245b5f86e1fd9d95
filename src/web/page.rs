// Server-rendered HTML for the upload form and the ranked report.
//
// Every user-supplied string (job description, filenames, keywords,
// diagnostics) goes through `escape_html` before it is interpolated.

use std::fmt::Write;

use crate::report::models::COLUMNS;
use crate::report::{Rating, Report};

const TITLE: &str = "Resume Screening Tool";

const STYLE: &str = r#"
body { background-color: #01796F; color: #F0F0F0; font-family: sans-serif; margin: 0; padding: 2rem 3rem; }
h1 { color: white; margin-bottom: 0.2rem; }
.subtitle { color: #DFF9F7; margin-bottom: 1.5rem; }
label { display: block; font-weight: bold; margin: 1rem 0 0.4rem; }
textarea { width: 100%; height: 12rem; background-color: #E8F5F4; color: #013934; border-radius: 6px; padding: 0.6rem; box-sizing: border-box; }
button, a.button { background-color: #015F55; color: white; border: none; border-radius: 6px; padding: 0.6rem 1.2rem; margin-top: 1rem; cursor: pointer; text-decoration: none; display: inline-block; }
button:hover, a.button:hover { background-color: #014741; }
.warning { background-color: #FFF4CE; color: #5C4400; border-radius: 6px; padding: 0.6rem 1rem; margin: 1rem 0; }
table { border-collapse: collapse; width: 100%; background-color: #E8F5F4; color: #013934; margin-top: 1rem; }
th, td { border: 1px solid #9CCFC9; padding: 0.4rem 0.6rem; text-align: left; }
th { background-color: #015F55; color: white; }
td.excellent { color: #0B6B2B; font-weight: bold; }
td.good { color: #8A6A00; }
td.low { color: #A12020; }
"#;

/// Escape text for interpolation into HTML element content or a quoted
/// attribute value.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The upload form, optionally with a warning above it and the job
/// description pre-filled.
pub fn render_form(warning: Option<&str>, job_description: &str) -> String {
    let mut body = String::new();
    if let Some(warning) = warning {
        push_warning(&mut body, warning);
    }
    push_form(&mut body, job_description);
    layout(&body)
}

/// The ranked report followed by the form, so another evaluation can be run
/// straight away.
pub fn render_report(report: &Report, job_description: &str) -> String {
    let mut body = String::new();

    for warning in &report.warnings {
        push_warning(&mut body, warning);
    }
    for record in report.unreadable() {
        let detail = record.extraction_error.as_deref().unwrap_or("unreadable");
        push_warning(&mut body, &format!("{}: {}", record.filename, detail));
    }

    body.push_str("<h3>Full Candidate Report</h3>\n<table>\n<thead><tr>");
    for column in COLUMNS {
        let _ = write!(body, "<th>{}</th>", escape_html(column));
    }
    body.push_str("</tr></thead>\n<tbody>\n");

    for record in &report.records {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{:.2}</td><td class=\"{}\">{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&record.filename),
            record.match_pct,
            rating_class(record.rating),
            record.rating,
            record.rank,
            escape_html(&record.missing_keywords_display()),
            escape_html(&record.suggestion),
        );
    }
    body.push_str("</tbody>\n</table>\n");
    body.push_str("<a class=\"button\" href=\"/download\">Download Result as Excel</a>\n");

    push_form(&mut body, job_description);
    layout(&body)
}

fn rating_class(rating: Rating) -> &'static str {
    match rating {
        Rating::Excellent => "excellent",
        Rating::Good => "good",
        Rating::Low => "low",
    }
}

fn push_warning(body: &mut String, message: &str) {
    let _ = writeln!(body, "<div class=\"warning\">{}</div>", escape_html(message));
}

fn push_form(body: &mut String, job_description: &str) {
    let _ = write!(
        body,
        r#"<form method="post" action="/evaluate" enctype="multipart/form-data">
<label for="job_description">Paste Job Description</label>
<textarea id="job_description" name="job_description">{}</textarea>
<label for="resumes">Upload Resume PDFs</label>
<input id="resumes" type="file" name="resumes" accept=".pdf,application/pdf" multiple>
<br>
<button type="submit">Evaluate Candidates</button>
</form>
"#,
        escape_html(job_description)
    );
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{TITLE}</title>
<style>{STYLE}</style>
</head>
<body>
<h1>{TITLE}</h1>
<div class="subtitle">Paste a job description and upload multiple resumes. Get ranked candidates instantly!</div>
{body}</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ScoreRecord;
    use chrono::Local;

    fn record(filename: &str, pct: f64, rating: Rating) -> ScoreRecord {
        ScoreRecord {
            filename: filename.to_string(),
            match_pct: pct,
            rating,
            rank: 1,
            missing_keywords: vec!["<kubernetes>".to_string()],
            suggestion: "Add more job-specific keywords.".to_string(),
            extraction_error: None,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_form_prefills_escaped_job_description() {
        let html = render_form(Some("Please enter a job description."), "</textarea><b>");
        assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;"));
        assert!(html.contains("<div class=\"warning\">Please enter a job description.</div>"));
    }

    #[test]
    fn test_report_escapes_filenames_and_keywords() {
        let report = Report {
            records: vec![record("<script>.pdf", 42.5, Rating::Low)],
            warnings: vec![],
            generated_at: Local::now(),
        };
        let html = render_report(&report, "");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;.pdf"));
        assert!(html.contains("&lt;kubernetes&gt;"));
        assert!(html.contains("<td>42.50</td>"));
        assert!(html.contains("href=\"/download\""));
    }
}
