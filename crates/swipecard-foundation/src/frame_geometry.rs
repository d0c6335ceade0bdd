//! Frame snapshot and the transforms derived from it.

use swipecard_graphics::{Point, Rect};

use crate::direction::TouchZone;
use crate::error::GeometryError;
use crate::gesture_constants::EXIT_ROTATION_MULTIPLIER;

/// Position, rotation and progress to apply to a frame during a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformUpdate {
    pub x: f64,
    pub y: f64,
    pub rotation_deg: f64,
    /// Signed horizontal progress in `[-1, 1]`.
    pub progress: f64,
}

impl TransformUpdate {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Where a released frame should animate to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExitTarget {
    pub final_x: f64,
    pub final_y: f64,
    pub final_rotation_deg: f64,
}

impl ExitTarget {
    pub fn position(&self) -> Point {
        Point::new(self.final_x, self.final_y)
    }
}

/// Immutable snapshot of a frame taken when a drag starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameGeometry {
    width: f64,
    height: f64,
    origin: Point,
    center: Point,
    half_width: f64,
    container: Rect,
}

impl FrameGeometry {
    /// Records the frame's bounds and center before it moves.
    ///
    /// `container` is the viewport an exiting frame has to clear.
    pub fn capture(
        frame_bounds: Rect,
        original_center: Point,
        container: Rect,
    ) -> Result<Self, GeometryError> {
        if !frame_bounds.is_finite() {
            return Err(GeometryError::NonFinite {
                field: "frame_bounds",
            });
        }
        if !original_center.is_finite() {
            return Err(GeometryError::NonFinite {
                field: "original_center",
            });
        }
        if !container.is_finite() {
            return Err(GeometryError::NonFinite { field: "container" });
        }
        if frame_bounds.width <= 0.0 {
            return Err(GeometryError::NonPositiveWidth(frame_bounds.width));
        }
        if frame_bounds.height <= 0.0 {
            return Err(GeometryError::NonPositiveHeight(frame_bounds.height));
        }

        Ok(Self {
            width: frame_bounds.width,
            height: frame_bounds.height,
            origin: frame_bounds.origin(),
            center: original_center,
            half_width: frame_bounds.width / 2.0,
            container,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Top-left corner before the drag started.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// `relative_y` is measured from the frame's top edge.
    pub fn touch_zone(&self, relative_y: f64) -> TouchZone {
        if relative_y <= self.height / 2.0 {
            TouchZone::Top
        } else {
            TouchZone::Bottom
        }
    }

    /// Horizontal displacement relative to the half width, saturating at ±1.
    pub fn scroll_progress(&self, dx: f64) -> f64 {
        (dx / self.half_width).clamp(-1.0, 1.0)
    }

    /// `rotation_factor` must already carry the touch zone sign.
    pub fn compute_transform(&self, dx: f64, dy: f64, rotation_factor: f64) -> TransformUpdate {
        let progress = self.scroll_progress(dx);
        TransformUpdate {
            x: self.origin.x + dx,
            y: self.origin.y + dy,
            rotation_deg: rotation_factor * progress,
            progress,
        }
    }

    /// Target whose rotated bounds lie entirely left of the container.
    pub fn left_exit_target(&self, current_position: Point, rotation_factor: f64) -> ExitTarget {
        let final_rotation_deg = rotation_factor * EXIT_ROTATION_MULTIPLIER;
        let final_x = self.container.x - self.width - self.exit_overhang(final_rotation_deg);
        ExitTarget {
            final_x,
            final_y: current_position.y,
            final_rotation_deg,
        }
    }

    /// Target whose rotated bounds lie entirely right of the container.
    pub fn right_exit_target(&self, current_position: Point, rotation_factor: f64) -> ExitTarget {
        let final_rotation_deg = rotation_factor * EXIT_ROTATION_MULTIPLIER;
        let final_x = self.container.right() + self.exit_overhang(final_rotation_deg);
        ExitTarget {
            final_x,
            final_y: current_position.y,
            final_rotation_deg,
        }
    }

    /// Same as [`Self::left_exit_target`], pushed `margin` further out.
    pub fn left_exit_target_with_margin(
        &self,
        current_position: Point,
        rotation_factor: f64,
        margin: f64,
    ) -> ExitTarget {
        let mut target = self.left_exit_target(current_position, rotation_factor);
        target.final_x -= margin;
        target
    }

    /// Same as [`Self::right_exit_target`], pushed `margin` further out.
    pub fn right_exit_target_with_margin(
        &self,
        current_position: Point,
        rotation_factor: f64,
        margin: f64,
    ) -> ExitTarget {
        let mut target = self.right_exit_target(current_position, rotation_factor);
        target.final_x += margin;
        target
    }

    /// The captured position with no rotation.
    pub fn recenter_target(&self) -> ExitTarget {
        ExitTarget {
            final_x: self.origin.x,
            final_y: self.origin.y,
            final_rotation_deg: 0.0,
        }
    }

    /// How far the frame reaches past its unrotated left and right edges when
    /// tilted by `rotation_deg` around its center. Never negative.
    fn exit_overhang(&self, rotation_deg: f64) -> f64 {
        let (sin, cos) = rotation_deg.to_radians().sin_cos();
        let half_extent = (self.width * cos.abs() + self.height * sin.abs()) / 2.0;
        (half_extent - self.half_width).max(0.0)
    }
}

#[cfg(test)]
#[path = "tests/frame_geometry_tests.rs"]
mod tests;
