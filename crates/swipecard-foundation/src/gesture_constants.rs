//! Shared gesture constants for swipeable cards.
//!
//! None of these are applied implicitly. They back the named
//! [`SwipeConfig::touch_defaults`](crate::SwipeConfig::touch_defaults) preset;
//! callers that know their platform's density should build a
//! [`SwipeConfig`](crate::SwipeConfig) from their own values.
//!
//! # DPI Considerations
//!
//! Distances are in logical pixels. For very high-density touch screens,
//! scale by the device's DPI factor before building the config.

/// Minor movement threshold in logical pixels.
///
/// A release closer than this to the initial press is a tap, not a drag.
/// Matches common platform conventions (Android uses ~8dp for
/// `ViewConfiguration.TOUCH_SLOP`).
pub const MINOR_MOVEMENT_THRESHOLD: f64 = 8.0;

/// Maximum tilt in degrees, reached when the drag saturates at the frame's
/// half width.
pub const MAX_ROTATION_DEGREES: f64 = 15.0;

/// Extra distance past the container edge an exiting frame travels.
pub const EXIT_MARGIN: f64 = 0.0;

/// Exit rotation is the saturated drag rotation scaled by this factor so the
/// tilt keeps growing while the frame leaves.
pub const EXIT_ROTATION_MULTIPLIER: f64 = 2.0;
