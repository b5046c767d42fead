//! The multi-stage career profile form.
//!
//! - [`field`] — field identities and definitions
//! - [`stage`] — the static stage tables for each [`FormVariant`](stage::FormVariant)
//! - [`values`] — collected raw values and validation errors
//! - [`validation`] — per-field rules
//! - [`session`] — the form state machine

pub mod field;
pub mod session;
pub mod stage;
pub mod validation;
pub mod values;
