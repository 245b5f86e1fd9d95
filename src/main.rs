use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use shortlist::config::Config;
use shortlist::extract::PdfTextExtractor;
use shortlist::pipeline::{self, RankerContext, Upload, ValidationError};
use shortlist::report::Resume;

/// Shortlist: rank resumes against a job description.
///
/// Scores each resume by TF-IDF cosine similarity to the job description,
/// lists the job keywords each one is missing, and writes the ranking to a
/// timestamped spreadsheet.
#[derive(Parser)]
#[command(name = "shortlist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank resume PDFs from disk and export the spreadsheet
    Rank {
        /// File holding the job description (plain text or PDF)
        #[arg(long, conflicts_with = "job_text", required_unless_present = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Resume PDFs, or directories to scan for *.pdf
        resumes: Vec<PathBuf>,

        /// Where to write final_ranking_*.xlsx (overrides SHORTLIST_OUTPUT_DIR)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Serve the upload form and JSON API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8080)
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("shortlist=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rank {
            job,
            job_text,
            resumes,
            output_dir,
            json,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }

            let job_description = match (job, job_text) {
                (_, Some(text)) => text,
                (Some(path), None) => read_job_description(&path)?,
                (None, None) => String::new(),
            };

            let paths = collect_resume_paths(&resumes)?;
            if let Err(invalid) = pipeline::validate_inputs(&job_description, paths.len()) {
                print_validation_warning(&invalid);
                return Ok(());
            }

            let ctx = RankerContext::from_config(&config)?;
            let extracted = extract_all(&ctx, &paths);

            let report = match pipeline::score_resumes(&ctx, &job_description, &extracted) {
                Ok(report) => report,
                Err(e) => match e.downcast_ref::<ValidationError>() {
                    Some(invalid) => {
                        print_validation_warning(invalid);
                        return Ok(());
                    }
                    None => return Err(e),
                },
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                shortlist::output::terminal::display_report(&report);
            }

            let path = ctx.export(&report)?;
            eprintln!(
                "\n{} {}",
                "Ranking saved to".bold(),
                path.display().to_string().cyan()
            );
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            let ctx = RankerContext::from_config(&config)?;
            shortlist::web::run_server(config, ctx, port, &bind).await?;
        }
    }

    Ok(())
}

fn print_validation_warning(invalid: &ValidationError) {
    eprintln!("{} {}", "Warning:".yellow().bold(), invalid);
}

/// Job descriptions may be given as a PDF or a plain text file.
fn read_job_description(path: &Path) -> Result<String> {
    if has_pdf_extension(path) {
        return PdfTextExtractor
            .extract_file(path)
            .with_context(|| format!("Failed to read job description {}", path.display()));
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job description {}", path.display()))
}

/// Expand directories into their *.pdf files (sorted by name, not recursive).
/// Files named explicitly are kept whatever their extension.
fn collect_resume_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = std::fs::read_dir(input)
                .with_context(|| format!("Failed to list {}", input.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_pdf_extension(p))
                .collect();
            found.sort();
            if found.is_empty() {
                warn!(dir = %input.display(), "No PDF files found in directory");
            }
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

/// Extract every resume with a progress bar. Files that can't be read are
/// kept as unreadable rows so they still appear in the ranking.
fn extract_all(ctx: &RankerContext, paths: &[PathBuf]) -> Vec<Resume> {
    let pb = ProgressBar::new(paths.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("  Extracting [{bar:30}] {pos}/{len} {msg}") {
        pb.set_style(style);
    }

    let mut resumes = Vec::with_capacity(paths.len());
    for path in paths {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        pb.set_message(filename.clone());

        let resume = match std::fs::read(path) {
            Ok(bytes) => pipeline::extract_resume(ctx, &Upload::new(filename, bytes)),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Failed to read resume");
                Resume::unreadable(filename, format!("Failed to read file: {e}"))
            }
        };
        resumes.push(resume);
        pb.inc(1);
    }
    pb.finish_and_clear();

    info!(count = resumes.len(), "Extracted resumes");
    resumes
}
