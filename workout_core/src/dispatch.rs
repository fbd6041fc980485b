//! Building trainings from raw sensor packages.

use crate::{
    Activity, ActivityKind, Error, Result, Running, SportsWalking, Swimming, Training,
    WorkoutSample,
};

/// Build the training matching `workout_type` from positional readings
///
/// Field layout per code:
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
/// - `SWM`: action, duration, weight, pool length, lap count
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Activity> {
    let kind: ActivityKind = workout_type.parse()?;

    if data.len() != kind.arity() {
        return Err(Error::ArgumentArityMismatch {
            kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    if let Some(&value) = data.iter().find(|v| !v.is_finite()) {
        return Err(Error::InvalidField {
            field: "reading",
            value,
        });
    }

    let action = count_field("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let activity = match kind {
        ActivityKind::Running => Activity::Running(Running::new(action, duration, weight)),
        ActivityKind::SportsWalking => {
            Activity::SportsWalking(SportsWalking::new(action, duration, weight, data[3]))
        }
        ActivityKind::Swimming => Activity::Swimming(Swimming::new(
            action,
            duration,
            weight,
            data[3],
            count_field("lap_count", data[4])?,
        )),
    };

    activity.check_readings()?;

    tracing::debug!("Read {} package: {:?}", kind.code(), activity);
    Ok(activity)
}

/// Build the training for a parsed sample
pub fn read_sample(sample: &WorkoutSample) -> Result<Activity> {
    read_package(&sample.workout_type, &sample.data)
}

/// Whole, non-negative readings such as step or lap counts
fn count_field(field: &'static str, value: f64) -> Result<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::InvalidField { field, value });
    }
    Ok(value as u32)
}
