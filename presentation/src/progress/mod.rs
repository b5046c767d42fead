//! Submission progress indicators

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
