// Long-lived state shared by every evaluation: the text normalizer (stopword
// list loaded once), the extractor, and the output directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::extract::{PdfTextExtractor, TextExtractor};
use crate::output::xlsx;
use crate::report::Report;
use crate::text::Normalizer;

/// Everything an evaluation needs, initialized once before serving requests.
pub struct RankerContext {
    pub normalizer: Normalizer,
    pub extractor: Box<dyn TextExtractor>,
    output_dir: PathBuf,
}

impl RankerContext {
    /// Build the context from configuration, creating the output directory if
    /// it doesn't exist yet.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            Normalizer::new()?,
            Box::new(PdfTextExtractor),
            &config.output_dir,
        )
    }

    pub fn new(
        normalizer: Normalizer,
        extractor: Box<dyn TextExtractor>,
        output_dir: &Path,
    ) -> Result<Self> {
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create output directory {}", output_dir.display())
        })?;
        info!(output_dir = %output_dir.display(), "Ranker context ready");

        Ok(Self {
            normalizer,
            extractor,
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Write `report` to a fresh timestamped spreadsheet in the output
    /// directory and return its path.
    pub fn export(&self, report: &Report) -> Result<PathBuf> {
        xlsx::export_report(report, &self.output_dir)
    }
}
