//! Error types for the workout_core library.

use crate::ActivityKind;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for workout_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Activity type code is not one of SWM, RUN, WLK
    #[error("Unknown activity type: {0:?}")]
    UnknownActivityType(String),

    /// Number of sensor fields does not match the activity's constructor
    #[error("{kind} expects {expected} fields, got {actual}")]
    ArgumentArityMismatch {
        kind: ActivityKind,
        expected: usize,
        actual: usize,
    },

    /// A sensor field holds a value the activity cannot use
    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: f64 },

    /// Duration must be a positive number of hours
    #[error("Invalid duration: {0} h (must be greater than zero)")]
    InvalidDuration(f64),

    /// Malformed package text or unsupported package file
    #[error("Invalid package: {0}")]
    InvalidPackage(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
