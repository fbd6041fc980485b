//! Distance, speed and calorie formulas for each activity.
//!
//! Every activity shares the base readings (action count, duration, weight)
//! and the base formulas. Each variant overrides what differs:
//! - Running: calories from mean speed
//! - SportsWalking: calories from mean speed and height
//! - Swimming: stroke length, pool-based mean speed, calories

use crate::units::*;
use crate::{ActivityKind, Error, Result, TrainingReport};

/// Readings shared by every activity
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainingData {
    /// Steps or strokes
    pub action: u32,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

impl TrainingData {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Common capability set of a performed training
///
/// The formulas are pure and never fail. A zero duration yields an infinite
/// or NaN speed here; [`Training::show_training_info`] rejects it before a
/// report is built.
pub trait Training {
    fn kind(&self) -> ActivityKind;

    fn data(&self) -> &TrainingData;

    /// Distance covered by one action (m)
    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    /// Distance covered (km)
    fn distance(&self) -> f64 {
        f64::from(self.data().action) * self.len_step() / M_IN_KM
    }

    /// Mean speed over the whole training (km/h)
    fn mean_speed(&self) -> f64 {
        self.distance() / self.data().duration
    }

    /// Calories spent (kcal)
    fn spent_calories(&self) -> f64;

    /// Reject readings a variant's own formulas divide by
    fn check_readings(&self) -> Result<()> {
        Ok(())
    }

    /// Snapshot of the computed values
    fn show_training_info(&self) -> Result<TrainingReport> {
        let duration = self.data().duration;
        if !(duration.is_finite() && duration > 0.0) {
            return Err(Error::InvalidDuration(duration));
        }
        self.check_readings()?;

        Ok(TrainingReport {
            training_type: self.kind().name().to_string(),
            duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        })
    }
}

// ============================================================================
// Variants
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub data: TrainingData,
}

impl Running {
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn spent_calories(&self) -> f64 {
        let TrainingData {
            duration, weight, ..
        } = self.data;
        (RUN_SPEED_MULTIPLIER * self.mean_speed() - RUN_SPEED_SHIFT) * weight / M_IN_KM
            * duration
            * MIN_IN_HOUR
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub data: TrainingData,
    /// Centimeters
    pub height: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn check_readings(&self) -> Result<()> {
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::InvalidField {
                field: "height",
                value: self.height,
            });
        }
        Ok(())
    }

    /// The squared speed is floor-divided by height. This keeps output
    /// identical to existing reports; do not replace with real division
    /// without sign-off.
    fn spent_calories(&self) -> f64 {
        let TrainingData {
            duration, weight, ..
        } = self.data;
        let speed_term = (self.mean_speed().powi(2) / self.height).floor();
        (WALK_WEIGHT_MULTIPLIER * weight + speed_term * WALK_SPEED_HEIGHT_MULTIPLIER * weight)
            * duration
            * MIN_IN_HOUR
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub data: TrainingData,
    /// Meters
    pub pool_length: f64,
    pub lap_count: u32,
}

impl Swimming {
    pub fn new(action: u32, duration: f64, weight: f64, pool_length: f64, lap_count: u32) -> Self {
        Self {
            data: TrainingData::new(action, duration, weight),
            pool_length,
            lap_count,
        }
    }
}

impl Training for Swimming {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn data(&self) -> &TrainingData {
        &self.data
    }

    fn len_step(&self) -> f64 {
        SWIM_LEN_STEP
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length * f64::from(self.lap_count) / M_IN_KM / self.data.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.data.weight
    }
}

// ============================================================================
// Activity Record
// ============================================================================

/// A training built from one sensor package
#[derive(Clone, Debug, PartialEq)]
pub enum Activity {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Activity {
    fn as_training(&self) -> &dyn Training {
        match self {
            Activity::Running(t) => t,
            Activity::SportsWalking(t) => t,
            Activity::Swimming(t) => t,
        }
    }
}

impl Training for Activity {
    fn kind(&self) -> ActivityKind {
        self.as_training().kind()
    }

    fn data(&self) -> &TrainingData {
        self.as_training().data()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn distance(&self) -> f64 {
        self.as_training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.as_training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }

    fn check_readings(&self) -> Result<()> {
        self.as_training().check_readings()
    }
}
