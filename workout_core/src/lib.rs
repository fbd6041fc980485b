#![forbid(unsafe_code)]

//! Core domain model for the workout calculator.
//!
//! This crate provides:
//! - Activity codes and raw sensor samples
//! - Distance, speed and calorie formulas per activity
//! - Dispatch from sensor packages to activities
//! - Report rendering (text templates and JSON)
//! - Package loading, configuration and logging

pub mod types;
pub mod error;
pub mod units;
pub mod training;
pub mod dispatch;
pub mod report;
pub mod package;
pub mod config;
pub mod logging;
pub mod pipeline;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use training::{Activity, Running, SportsWalking, Swimming, Training, TrainingData};
pub use dispatch::{read_package, read_sample};
pub use report::{Locale, OutputFormat, TrainingReport};
pub use package::{default_packages, load_packages, parse_package};
pub use config::Config;
pub use pipeline::{render_reports, summarize};
