//! JSONL file writer for telemetry events.
//!
//! Each [`TelemetryEvent`] is serialized as a single JSON line with a
//! `timestamp`, appended to the file via a buffered writer.

use hike_application::{TelemetryEvent, TelemetrySink};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

#[derive(Serialize)]
struct Record<'a> {
    timestamp: String,
    #[serde(flatten)]
    event: &'a TelemetryEvent,
}

/// Telemetry sink that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlTelemetrySink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTelemetrySink {
    /// Open `path` for appending, creating it and its parent directories.
    ///
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create telemetry directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open telemetry log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// `$XDG_DATA_HOME/hike-predictor/telemetry.jsonl`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("hike-predictor").join("telemetry.jsonl"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TelemetrySink for JsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        debug!("telemetry: {} ({})", event.name, event.label);

        let record = Record {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event: &event,
        };
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlTelemetrySink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hike_domain::Sentiment;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_sink_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("telemetry.jsonl");
        let sink = JsonlTelemetrySink::new(&path).unwrap();

        sink.record(TelemetryEvent::predict_clicked());
        sink.record(TelemetryEvent::feedback_submitted(Sentiment::Liked));
        drop(sink);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["name"], "predict_button_click");
        assert_eq!(lines[0]["category"], "engagement");
        assert_eq!(lines[0]["label"], "start_prediction");
        assert!(lines[0]["timestamp"].is_string());
        assert_eq!(lines[1]["name"], "feedback_submitted");
        assert_eq!(lines[1]["label"], "liked");
    }

    #[test]
    fn test_sink_appends_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("telemetry.jsonl");

        JsonlTelemetrySink::new(&path)
            .unwrap()
            .record(TelemetryEvent::check_hike_clicked());
        JsonlTelemetrySink::new(&path)
            .unwrap()
            .record(TelemetryEvent::reset_clicked());

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["name"], "check_hike_button_click");
        assert_eq!(lines[1]["name"], "reset_form_button_click");
    }

    #[test]
    fn test_sink_returns_none_when_path_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlTelemetrySink::new(dir.path()).is_none());
    }
}
