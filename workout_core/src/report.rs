//! Training summaries and their rendering.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Read-only snapshot of a computed training
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TrainingReport {
    pub training_type: String,
    /// Hours
    pub duration: f64,
    /// Kilometers
    pub distance: f64,
    /// Kilometers per hour
    pub speed: f64,
    /// Kilocalories
    pub calories: f64,
}

/// Language of the summary template
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(Error::Config(format!("Unknown locale: {}", other))),
        }
    }
}

/// How reports are written to the output
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}

impl TrainingReport {
    /// Fixed-template summary line, values rounded to three decimals
    pub fn message(&self, locale: Locale) -> String {
        let TrainingReport {
            training_type,
            duration,
            distance,
            speed,
            calories,
        } = self;

        match locale {
            Locale::En => format!(
                "Training type: {training_type}; \
                 Duration: {duration:.3} h; \
                 Distance: {distance:.3} km; \
                 Mean speed: {speed:.3} km/h; \
                 Calories spent: {calories:.3}."
            ),
            Locale::Ru => format!(
                "Тип тренировки: {training_type}; \
                 Длительность: {duration:.3} ч.; \
                 Дистанция: {distance:.3} км; \
                 Ср. скорость: {speed:.3} км/ч; \
                 Потрачено ккал: {calories:.3}."
            ),
        }
    }

    /// Single-line JSON object with unrounded values
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn render(&self, format: OutputFormat, locale: Locale) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.message(locale)),
            OutputFormat::Json => self.to_json(),
        }
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message(Locale::default()))
    }
}
