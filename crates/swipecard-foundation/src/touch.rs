use swipecard_graphics::Point;

use crate::config::non_negative;
use crate::error::ConfigError;

/// Decides whether a release counts as a tap rather than a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchClassifier {
    threshold: f64,
}

impl TouchClassifier {
    /// Fails unless `threshold` is finite and non-negative.
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        let threshold = non_negative("minor_movement_threshold", threshold)?;
        Ok(Self { threshold })
    }

    /// For thresholds a [`SwipeConfig`](crate::SwipeConfig) already checked.
    pub(crate) fn from_validated(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// True if the release stayed strictly within the threshold distance of
    /// the initial press.
    pub fn is_minor_movement(&self, release: Point, initial: Point) -> bool {
        release.distance_to(initial) < self.threshold
    }
}
