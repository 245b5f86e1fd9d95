// Shortlist: rank candidate resumes against a job description
//
// This is the library root. Each module corresponds to one stage of the
// evaluation: extract -> normalize -> score -> report -> export.

pub mod config;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod text;

#[cfg(feature = "web")]
pub mod web;
