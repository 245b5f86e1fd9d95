// Colored terminal output for the ranked candidate report.

use colored::Colorize;

use crate::report::{Rating, Report};

/// Display the ranked candidate table in the terminal.
pub fn display_report(report: &Report) {
    if report.is_empty() {
        println!("No resumes were evaluated.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Candidate Report ({} resumes) ===", report.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<36} {:>7}  {:<9}  {}",
        "Rank".dimmed(),
        "Filename".dimmed(),
        "Match %".dimmed(),
        "Rating".dimmed(),
        "Missing Keywords".dimmed(),
    );
    println!("  {}", "-".repeat(96).dimmed());

    for record in &report.records {
        let filename = super::truncate_chars(&record.filename, 34);
        let missing = if record.missing_keywords.is_empty() {
            "-".to_string()
        } else {
            super::truncate_chars(&record.missing_keywords_display(), 60)
        };

        println!(
            "  {:>4}. {:<36} {:>6.2}  {:<9}  {}",
            record.rank,
            filename,
            record.match_pct,
            colorize_rating(record.rating),
            missing.dimmed(),
        );
        println!("        {}", record.suggestion.italic());
    }

    println!();

    // Summary
    let excellent = count_rating(report, Rating::Excellent);
    let good = count_rating(report, Rating::Good);
    let low = count_rating(report, Rating::Low);
    println!(
        "  {} excellent, {} good, {} low",
        excellent.to_string().green().bold(),
        good.to_string().yellow(),
        low.to_string().red(),
    );

    for record in report.unreadable() {
        println!(
            "  {} {}: {}",
            "Warning:".yellow(),
            record.filename,
            record.extraction_error.as_deref().unwrap_or("unreadable"),
        );
    }
    for warning in &report.warnings {
        println!("  {} {}", "Warning:".yellow(), warning);
    }
}

fn count_rating(report: &Report, rating: Rating) -> usize {
    report
        .records
        .iter()
        .filter(|r| r.rating == rating)
        .count()
}

/// Colorize a rating, padded to the column width before coloring so ANSI
/// codes don't break alignment.
fn colorize_rating(rating: Rating) -> colored::ColoredString {
    let padded = format!("{:<9}", rating.as_str());
    match rating {
        Rating::Excellent => padded.green().bold(),
        Rating::Good => padded.yellow(),
        Rating::Low => padded.red(),
    }
}
