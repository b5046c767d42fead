//! Output formatting

pub mod console;
pub mod tips;

pub use console::ConsoleFormatter;
