//! Reset Form use case

use crate::ports::telemetry::{NoTelemetry, TelemetryEvent, TelemetrySink};
use hike_domain::FormSession;
use std::sync::Arc;
use tracing::info;

/// Use case for discarding a session and starting over
pub struct ResetFormUseCase {
    telemetry: Arc<dyn TelemetrySink>,
}

impl ResetFormUseCase {
    pub fn new() -> Self {
        Self {
            telemetry: Arc::new(NoTelemetry),
        }
    }

    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    pub fn execute(&self, session: &mut FormSession) {
        session.reset();
        self.telemetry.record(TelemetryEvent::reset_clicked());
        info!("Form reset (generation {})", session.generation());
    }
}

impl Default for ResetFormUseCase {
    fn default() -> Self {
        Self::new()
    }
}
