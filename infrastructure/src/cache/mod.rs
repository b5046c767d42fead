//! Prediction id persistence

pub mod file_cache;

pub use file_cache::FilePredictionIdCache;
