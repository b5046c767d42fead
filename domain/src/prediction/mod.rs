//! Prediction request/response values and their presentation rules.

pub mod hike;
pub mod outcome;
pub mod request;
pub mod result;
