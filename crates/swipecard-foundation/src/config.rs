//! Caller-supplied tuning for swipe gestures.

use crate::error::ConfigError;
use crate::gesture_constants::{EXIT_MARGIN, MAX_ROTATION_DEGREES, MINOR_MOVEMENT_THRESHOLD};
use crate::touch::TouchClassifier;

/// Tuning values for a swipeable card.
///
/// All distances are logical pixels. Every field is provided by the caller;
/// [`SwipeConfig::touch_defaults`] is an explicit preset, not a fallback.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSwipeConfig"))]
pub struct SwipeConfig {
    max_rotation_deg: f64,
    minor_movement_threshold: f64,
    exit_margin: f64,
}

impl SwipeConfig {
    pub fn new(
        max_rotation_deg: f64,
        minor_movement_threshold: f64,
        exit_margin: f64,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            max_rotation_deg: finite("max_rotation_deg", max_rotation_deg)?,
            minor_movement_threshold: non_negative(
                "minor_movement_threshold",
                minor_movement_threshold,
            )?,
            exit_margin: non_negative("exit_margin", exit_margin)?,
        };
        Ok(config)
    }

    /// Preset built from [`gesture_constants`](crate::gesture_constants).
    pub fn touch_defaults() -> Self {
        Self {
            max_rotation_deg: MAX_ROTATION_DEGREES,
            minor_movement_threshold: MINOR_MOVEMENT_THRESHOLD,
            exit_margin: EXIT_MARGIN,
        }
    }

    pub fn with_max_rotation_deg(self, max_rotation_deg: f64) -> Result<Self, ConfigError> {
        Self::new(max_rotation_deg, self.minor_movement_threshold, self.exit_margin)
    }

    pub fn with_minor_movement_threshold(self, threshold: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_rotation_deg, threshold, self.exit_margin)
    }

    pub fn with_exit_margin(self, exit_margin: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_rotation_deg, self.minor_movement_threshold, exit_margin)
    }

    /// Tilt reached at full drag saturation. Negative values tilt the other way.
    pub fn max_rotation_deg(&self) -> f64 {
        self.max_rotation_deg
    }

    pub fn minor_movement_threshold(&self) -> f64 {
        self.minor_movement_threshold
    }

    pub fn exit_margin(&self) -> f64 {
        self.exit_margin
    }

    pub fn classifier(&self) -> TouchClassifier {
        TouchClassifier::from_validated(self.minor_movement_threshold)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSwipeConfig {
    max_rotation_deg: f64,
    minor_movement_threshold: f64,
    exit_margin: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSwipeConfig> for SwipeConfig {
    type Error = ConfigError;

    fn try_from(raw: RawSwipeConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_rotation_deg, raw.minor_movement_threshold, raw.exit_margin)
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
