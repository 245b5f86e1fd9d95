// Report assembly — turns per-resume similarity scores into the ranked table.

pub mod builder;
pub mod models;

pub use builder::build_report;
pub use models::{Rating, Report, Resume, ScoreRecord};
