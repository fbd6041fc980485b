//! Core domain types for the workout calculator.
//!
//! This module defines:
//! - Activity type codes and their field layouts
//! - Raw sensor samples as read from a package

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Activity Types
// ============================================================================

/// Activity type code as sent by the sensor block
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Three-letter code used in sensor packages
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Swimming => "SWM",
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
        }
    }

    /// Training name shown in reports
    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Swimming => "Swimming",
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional sensor fields the activity is built from
    ///
    /// Running: action, duration, weight.
    /// SportsWalking: + height.
    /// Swimming: + pool length, lap count.
    pub fn arity(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityKind {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| Error::UnknownActivityType(code.to_string()))
    }
}

// ============================================================================
// Sensor Samples
// ============================================================================

/// One package of readings from the sensor block
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSample {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl WorkoutSample {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}
