use thiserror::Error;

use crate::session::SessionState;

/// Rejected frame geometry at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// Progress is measured against half the width, so it must be positive.
    #[error("frame width must be positive, got {0}")]
    NonPositiveWidth(f64),
    #[error("frame height must be positive, got {0}")]
    NonPositiveHeight(f64),
    #[error("{field} contains a non-finite coordinate")]
    NonFinite { field: &'static str },
}

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// A drag session was driven after it stopped dragging.
///
/// This is a caller bug: every session handles exactly one press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("drag session is {state:?}, expected Dragging")]
    NotDragging { state: SessionState },
}
