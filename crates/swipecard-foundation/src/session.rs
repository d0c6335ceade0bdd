//! One press-to-release cycle on a card frame.

use swipecard_graphics::{Point, Rect};

use crate::config::SwipeConfig;
use crate::direction::{ExitDirection, TouchZone};
use crate::error::{GeometryError, SessionError};
use crate::frame_geometry::{ExitTarget, FrameGeometry, TransformUpdate};
use crate::frame_result::FrameResult;
use crate::touch::TouchClassifier;

/// Lifecycle of a [`DragSession`]. Everything but `Dragging` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionState {
    Dragging,
    Exiting,
    Recentering,
    Clicked,
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        self != SessionState::Dragging
    }
}

/// Outcome of releasing a dragged frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Release {
    pub result: FrameResult,
    /// Where the frame should animate to.
    pub target: ExitTarget,
    /// Scroll progress at the release point.
    pub progress: f64,
}

/// Drag state for a single press on a frame.
///
/// A session never outlives its press: a new press always begins a new
/// session. All outputs are computed from the captured snapshot and the
/// latest pointer position only.
#[derive(Clone, Debug)]
pub struct DragSession {
    geometry: FrameGeometry,
    touch_zone: TouchZone,
    initial_touch: Point,
    rotation_factor: f64,
    classifier: TouchClassifier,
    exit_margin: f64,
    state: SessionState,
}

impl DragSession {
    /// Starts dragging `frame_bounds`.
    ///
    /// `relative_y` is the press position measured from the frame's top edge;
    /// it picks the touch zone that decides the tilt direction.
    pub fn begin(
        frame_bounds: Rect,
        frame_center: Point,
        container: Rect,
        initial_touch: Point,
        relative_y: f64,
        config: &SwipeConfig,
    ) -> Result<Self, GeometryError> {
        let geometry = FrameGeometry::capture(frame_bounds, frame_center, container)?;
        Ok(Self::with_geometry(geometry, initial_touch, relative_y, config))
    }

    pub fn with_geometry(
        geometry: FrameGeometry,
        initial_touch: Point,
        relative_y: f64,
        config: &SwipeConfig,
    ) -> Self {
        let touch_zone = geometry.touch_zone(relative_y);
        log::debug!(
            "drag session started at ({}, {}) in {:?} zone",
            initial_touch.x,
            initial_touch.y,
            touch_zone
        );
        Self {
            geometry,
            touch_zone,
            initial_touch,
            rotation_factor: config.max_rotation_deg(),
            classifier: config.classifier(),
            exit_margin: config.exit_margin(),
            state: SessionState::Dragging,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn touch_zone(&self) -> TouchZone {
        self.touch_zone
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    pub fn initial_touch(&self) -> Point {
        self.initial_touch
    }

    /// Transform for the frame with the pointer at `current_touch`.
    pub fn on_move(&self, current_touch: Point) -> Result<TransformUpdate, SessionError> {
        self.ensure_dragging()?;
        let delta = current_touch - self.initial_touch;
        let rotation_factor = self.rotation_factor * self.touch_zone.drag_rotation_sign();
        let update = self
            .geometry
            .compute_transform(delta.x, delta.y, rotation_factor);
        log::trace!(
            "drag move to ({}, {}) rotation {} progress {}",
            update.x,
            update.y,
            update.rotation_deg,
            update.progress
        );
        Ok(update)
    }

    /// Classifies the release at `current_touch` and ends the session.
    ///
    /// A release within the minor movement threshold is a click regardless of
    /// progress. The returned target is what the frame should animate to; the
    /// session itself never animates anything.
    pub fn on_release(&mut self, current_touch: Point) -> Result<Release, SessionError> {
        self.ensure_dragging()?;
        let delta = current_touch - self.initial_touch;
        let progress = self.geometry.scroll_progress(delta.x);

        let result = if self
            .classifier
            .is_minor_movement(current_touch, self.initial_touch)
        {
            FrameResult::click()
        } else {
            FrameResult::from_scroll_progress(progress)
        };

        let target = match result {
            FrameResult::Exit(direction) => {
                let origin = self.geometry.origin();
                let current_position = Point::new(origin.x + delta.x, origin.y + delta.y);
                self.exit_target(direction, current_position)
            }
            FrameResult::Click | FrameResult::Recenter => self.geometry.recenter_target(),
        };

        self.state = match result {
            FrameResult::Click => SessionState::Clicked,
            FrameResult::Exit(_) => SessionState::Exiting,
            FrameResult::Recenter => SessionState::Recentering,
        };
        log::debug!(
            "drag session released with {:?} at progress {}",
            result,
            progress
        );

        Ok(Release {
            result,
            target,
            progress,
        })
    }

    /// Abandons the drag without a result, e.g. on a platform touch cancel.
    ///
    /// Returns the target to put the frame back where it started.
    pub fn cancel(&mut self) -> Result<ExitTarget, SessionError> {
        self.ensure_dragging()?;
        self.state = SessionState::Cancelled;
        log::debug!("drag session cancelled");
        Ok(self.geometry.recenter_target())
    }

    /// Base rotation factor with the sign for this touch zone and exit.
    pub fn exit_rotation_factor(&self, direction: ExitDirection) -> f64 {
        self.rotation_factor * self.touch_zone.exit_rotation_sign(direction)
    }

    fn exit_target(&self, direction: ExitDirection, current_position: Point) -> ExitTarget {
        let rotation_factor = self.exit_rotation_factor(direction);
        match direction {
            ExitDirection::Left => self.geometry.left_exit_target_with_margin(
                current_position,
                rotation_factor,
                self.exit_margin,
            ),
            ExitDirection::Right => self.geometry.right_exit_target_with_margin(
                current_position,
                rotation_factor,
                self.exit_margin,
            ),
        }
    }

    fn ensure_dragging(&self) -> Result<(), SessionError> {
        if self.state == SessionState::Dragging {
            Ok(())
        } else {
            Err(SessionError::NotDragging { state: self.state })
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
