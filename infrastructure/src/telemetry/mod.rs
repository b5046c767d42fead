//! Telemetry sinks

pub mod jsonl_sink;

pub use jsonl_sink::JsonlTelemetrySink;
