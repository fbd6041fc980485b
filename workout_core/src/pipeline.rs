//! Package → training → report pipeline.
//!
//! Every sample is dispatched and reported before anything is rendered, so a
//! single bad package fails the whole batch without partial output.

use crate::{read_sample, Locale, OutputFormat, Result, Training, TrainingReport, WorkoutSample};

/// Compute a report for every sample, in input order
pub fn summarize(samples: &[WorkoutSample]) -> Result<Vec<TrainingReport>> {
    samples
        .iter()
        .map(|sample| {
            let report = read_sample(sample)?.show_training_info()?;
            tracing::info!(
                "{}: {:.3} km, {:.3} kcal",
                report.training_type,
                report.distance,
                report.calories
            );
            Ok(report)
        })
        .collect()
}

/// Render one output line per report
pub fn render_reports(
    reports: &[TrainingReport],
    format: OutputFormat,
    locale: Locale,
) -> Result<Vec<String>> {
    reports
        .iter()
        .map(|report| report.render(format, locale))
        .collect()
}
