use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Default directory for generated spreadsheets, relative to the working dir.
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Default request body limit for the web upload form, in megabytes.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 50;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override individual values after loading.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where final_ranking_*.xlsx files are written (SHORTLIST_OUTPUT_DIR)
    pub output_dir: PathBuf,
    /// Upload size limit for the web server (SHORTLIST_MAX_UPLOAD_MB)
    pub max_upload_mb: usize,
}

impl Config {
    /// Load configuration from environment variables. Every value has a default.
    pub fn load() -> Result<Self> {
        let output_dir = env::var("SHORTLIST_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let max_upload_mb = match env::var("SHORTLIST_MAX_UPLOAD_MB") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("SHORTLIST_MAX_UPLOAD_MB must be a number, got {raw:?}"))?,
            Err(_) => DEFAULT_MAX_UPLOAD_MB,
        };

        if max_upload_mb == 0 {
            anyhow::bail!("SHORTLIST_MAX_UPLOAD_MB must be at least 1");
        }

        Ok(Self {
            output_dir,
            max_upload_mb,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.max_upload_mb, 50);
    }

    #[test]
    fn test_max_upload_bytes() {
        let config = Config {
            output_dir: PathBuf::from("out"),
            max_upload_mb: 2,
        };
        assert_eq!(config.max_upload_bytes(), 2 * 1024 * 1024);
    }
}
