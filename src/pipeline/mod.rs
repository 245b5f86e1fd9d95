// Evaluation pipeline — the one entry point every surface calls.
//
// Flow: validate input -> extract text per upload -> score against the job
// description -> build the ranked report. Export is a separate step so callers
// decide when (and whether) to write the spreadsheet.

pub mod context;
pub mod evaluate;

pub use context::RankerContext;
pub use evaluate::{
    evaluate, extract_resume, score_resumes, validate, validate_inputs, Upload,
    ValidationError,
};
