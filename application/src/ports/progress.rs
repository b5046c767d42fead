//! Progress notification port
//!
//! Lets the presentation layer show a busy indicator while a prediction
//! request is in flight.

/// Callback for submission progress
pub trait SubmissionProgress: Send + Sync {
    /// Called right before the request is sent
    fn on_submit_start(&self);

    /// Called when the request finished, successfully or not
    fn on_submit_finish(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionProgress for NoProgress {
    fn on_submit_start(&self) {}
    fn on_submit_finish(&self, _success: bool) {}
}
