//! Port for engagement telemetry.
//!
//! Defines the [`TelemetrySink`] trait for reporting a handful of fixed
//! user interactions (starting a check, requesting a prediction, resetting
//! the form, leaving feedback).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! diagnostic messages, while this port mirrors product analytics events.
//! Sinks are optional; [`NoTelemetry`] is the default everywhere.

use hike_domain::Sentiment;
use serde::Serialize;

pub const ENGAGEMENT: &str = "engagement";

/// A single analytics event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetryEvent {
    /// Event name (e.g., "predict_button_click").
    pub name: &'static str,
    /// Event category.
    pub category: &'static str,
    /// Free-form label.
    pub label: String,
}

impl TelemetryEvent {
    pub fn new(name: &'static str, label: impl Into<String>) -> Self {
        Self {
            name,
            category: ENGAGEMENT,
            label: label.into(),
        }
    }

    /// The user opened the wizard.
    pub fn check_hike_clicked() -> Self {
        Self::new("check_hike_button_click", "Start checking Hike")
    }

    /// A valid form was submitted.
    pub fn predict_clicked() -> Self {
        Self::new("predict_button_click", "start_prediction")
    }

    /// The form was reset.
    pub fn reset_clicked() -> Self {
        Self::new("reset_form_button_click", "reset_prediction")
    }

    /// Feedback reached the service.
    pub fn feedback_submitted(sentiment: Sentiment) -> Self {
        Self::new("feedback_submitted", sentiment.as_str())
    }
}

/// Port for recording telemetry events.
///
/// `record` is synchronous and non-fallible: telemetry must never disrupt
/// the form flow, so sinks swallow their own failures.
pub trait TelemetrySink: Send + Sync {
    fn record(&self, event: TelemetryEvent);
}

/// No-op implementation for tests and when telemetry is disabled.
pub struct NoTelemetry;

impl TelemetrySink for NoTelemetry {
    fn record(&self, _event: TelemetryEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_are_engagement() {
        for event in [
            TelemetryEvent::check_hike_clicked(),
            TelemetryEvent::predict_clicked(),
            TelemetryEvent::reset_clicked(),
            TelemetryEvent::feedback_submitted(Sentiment::Liked),
        ] {
            assert_eq!(event.category, ENGAGEMENT);
        }
    }

    #[test]
    fn test_feedback_label_carries_sentiment() {
        assert_eq!(
            TelemetryEvent::feedback_submitted(Sentiment::Disliked).label,
            "disliked"
        );
    }
}
