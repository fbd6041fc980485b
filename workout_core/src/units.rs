//! Fixed conversion factors and formula coefficients.

/// Distance covered by one step when running or walking (m)
pub const LEN_STEP: f64 = 0.65;
/// Distance covered by one stroke when swimming (m)
pub const SWIM_LEN_STEP: f64 = 1.38;
/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Running: multiplier applied to mean speed
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
/// Running: subtracted from the scaled mean speed
pub const RUN_SPEED_SHIFT: f64 = 20.0;

/// Sports walking: multiplier applied to weight
pub const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
/// Sports walking: multiplier applied to the speed/height term
pub const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Swimming: added to mean speed
pub const SWIM_SPEED_SHIFT: f64 = 1.1;
/// Swimming: multiplier applied to weight
pub const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;
