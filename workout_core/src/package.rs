//! Sensor packages: the built-in demo set and loading from text or files.
//!
//! Supported sources:
//! - `CODE:v1,v2,...` strings (command line)
//! - headerless CSV rows `CODE,v1,v2,...`
//! - JSON arrays of `{"workout_type": "...", "data": [...]}`

use crate::{Error, Result, WorkoutSample};
use csv::ReaderBuilder;
use once_cell::sync::Lazy;
use std::path::Path;

/// Packages processed when nothing else is supplied
static DEFAULT_PACKAGES: Lazy<Vec<WorkoutSample>> = Lazy::new(|| {
    vec![
        WorkoutSample::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutSample::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutSample::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
});

pub fn default_packages() -> &'static [WorkoutSample] {
    &DEFAULT_PACKAGES
}

/// Parse a `CODE:v1,v2,...` package
///
/// The code itself is checked later by the dispatcher.
pub fn parse_package(text: &str) -> Result<WorkoutSample> {
    let (code, values) = text
        .split_once(':')
        .ok_or_else(|| Error::InvalidPackage(format!("expected CODE:values, got {:?}", text)))?;

    let data = values
        .split(',')
        .map(|v| parse_value(v.trim()))
        .collect::<Result<Vec<_>>>()?;

    Ok(WorkoutSample::new(code.trim(), data))
}

/// Load packages from a `.csv` or `.json` file
pub fn load_packages(path: &Path) -> Result<Vec<WorkoutSample>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let samples = match extension.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        }
        _ => {
            return Err(Error::InvalidPackage(format!(
                "unsupported package file {:?} (expected .csv or .json)",
                path
            )))
        }
    };

    tracing::info!("Loaded {} packages from {:?}", samples.len(), path);
    Ok(samples)
}

fn load_csv(path: &Path) -> Result<Vec<WorkoutSample>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_path(path)?;

    let mut samples = Vec::new();
    for (row_num, record) in reader.records().enumerate() {
        let record = record?;
        let mut fields = record.iter();

        let code = match fields.next() {
            Some(code) if !code.is_empty() => code,
            _ if record.iter().all(str::is_empty) => {
                tracing::debug!("Skipping empty CSV row {}", row_num + 1);
                continue;
            }
            _ => {
                return Err(Error::InvalidPackage(format!(
                    "row {} of {:?} has readings but no activity code",
                    row_num + 1,
                    path
                )))
            }
        };

        let data = fields.map(parse_value).collect::<Result<Vec<_>>>()?;
        samples.push(WorkoutSample::new(code, data));
    }

    Ok(samples)
}

fn parse_value(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|e| Error::InvalidPackage(format!("invalid reading {:?}: {}", text, e)))
}
