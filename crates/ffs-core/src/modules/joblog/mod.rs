//! Job-log extraction.
//!
//! Every line of the engine's job output is classified into a [`LineKind`]
//! and folded into a [`JobLogSummary`]. Lines that match no family are kept
//! as [`LineKind::Unmatched`] and counted, never silently dropped.

mod model;
mod parser;

pub use model::{JobLogSummary, bounding_box_volume, extract_job_log};
pub use parser::{LineKind, classify_line};
