//! Progress reporting while a prediction request is in flight

use colored::Colorize;
use hike_application::SubmissionProgress;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while waiting for the prediction service
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgress for ProgressReporter {
    fn on_submit_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Crunching the numbers...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_submit_finish(&self, success: bool) {
        let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        if success {
            pb.finish_with_message(format!("{}", "Prediction ready".green()));
        } else {
            pb.finish_with_message(format!("{}", "Prediction failed".red()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SubmissionProgress for SimpleProgress {
    fn on_submit_start(&self) {
        println!("{} {}", "->".cyan(), "Requesting prediction...".bold());
    }

    fn on_submit_finish(&self, success: bool) {
        if success {
            println!("  {} done", "v".green());
        } else {
            println!("  {} failed", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_is_cleared_after_finish() {
        let reporter = ProgressReporter::new();
        reporter.on_submit_start();
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_submit_finish(true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_finish_without_start_is_noop() {
        ProgressReporter::new().on_submit_finish(false);
    }
}
