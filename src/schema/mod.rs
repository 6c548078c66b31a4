//! Schema module - Configuration and reporting types for phrase evolution.

mod config;
mod progress;

pub use config::*;
pub use progress::*;
