//! Pointer-driven wiring between drag sessions and a platform card frame.

use swipecard_graphics::{Point, Rect};
use thiserror::Error;

use crate::config::SwipeConfig;
use crate::error::{GeometryError, SessionError};
use crate::frame_geometry::{ExitTarget, TransformUpdate};
use crate::frame_result::FrameResult;
use crate::input::{PointerEvent, PointerEventKind, PointerId};
use crate::session::DragSession;

/// Platform view a [`SwipeController`] moves around.
///
/// The controller only ever borrows the frame for the duration of one event,
/// so implementations never need to hold a reference back to the controller.
pub trait CardFrame {
    /// Current bounds in the container's coordinate space.
    fn bounds(&self) -> Rect;

    /// Pivot the frame rotates around.
    fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Viewport an exiting frame has to clear.
    fn container(&self) -> Rect;

    fn apply_transform(&mut self, update: &TransformUpdate);

    /// Starts animating toward `target`. For exits the platform must call
    /// [`SwipeController::animation_finished`] once the animation ends.
    fn animate_to(&mut self, target: &ExitTarget);
}

/// Receives the outcome of each finished swipe.
pub trait CardResultListener {
    fn on_card_result(&mut self, result: FrameResult);
}

impl<F> CardResultListener for F
where
    F: FnMut(FrameResult),
{
    fn on_card_result(&mut self, result: FrameResult) {
        self(result)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SwipeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Turns a pointer stream into drag sessions on one card.
///
/// Only the pointer that pressed drives the drag; events from other pointers
/// are ignored until it lifts.
pub struct SwipeController<L> {
    config: SwipeConfig,
    listener: L,
    session: Option<DragSession>,
    active_pointer: Option<PointerId>,
    pending_exit: Option<FrameResult>,
}

impl<L: CardResultListener> SwipeController<L> {
    pub fn new(config: SwipeConfig, listener: L) -> Self {
        Self {
            config,
            listener,
            session: None,
            active_pointer: None,
            pending_exit: None,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// True while an exit animation is running and its result is undelivered.
    pub fn is_exiting(&self) -> bool {
        self.pending_exit.is_some()
    }

    /// Handles one pointer event.
    ///
    /// Returns the scroll progress for moves and releases that belong to the
    /// active drag, `None` for everything else.
    pub fn handle_pointer_event<F: CardFrame>(
        &mut self,
        frame: &mut F,
        event: &PointerEvent,
    ) -> Result<Option<f64>, SwipeError> {
        match event.kind {
            PointerEventKind::Down => {
                self.press(frame, event)?;
                Ok(None)
            }
            PointerEventKind::Move => self.drag(frame, event),
            PointerEventKind::Up => self.release(frame, event),
            PointerEventKind::Cancel => {
                self.cancel(frame, event)?;
                Ok(None)
            }
        }
    }

    /// Delivers the result of a finished exit animation.
    ///
    /// Extra calls without a pending exit are ignored.
    pub fn animation_finished(&mut self) {
        match self.pending_exit.take() {
            Some(result) => self.listener.on_card_result(result),
            None => log::debug!("animation finished with no pending exit"),
        }
    }

    fn press<F: CardFrame>(
        &mut self,
        frame: &mut F,
        event: &PointerEvent,
    ) -> Result<(), SwipeError> {
        if self.pending_exit.is_some() {
            log::debug!("ignoring press on a card that is exiting");
            return Ok(());
        }
        if self.session.is_some() {
            if self.active_pointer != Some(event.id) {
                log::trace!("ignoring press from pointer {} during a drag", event.id);
                return Ok(());
            }
            log::warn!("press without release; discarding previous drag session");
            self.session = None;
        }

        let session = DragSession::begin(
            frame.bounds(),
            frame.center(),
            frame.container(),
            event.global_position,
            event.position.y,
            &self.config,
        )?;
        self.session = Some(session);
        self.active_pointer = Some(event.id);
        Ok(())
    }

    fn drag<F: CardFrame>(
        &mut self,
        frame: &mut F,
        event: &PointerEvent,
    ) -> Result<Option<f64>, SwipeError> {
        let Some(session) = self.active_session(event) else {
            return Ok(None);
        };
        let update = session.on_move(event.global_position)?;
        frame.apply_transform(&update);
        Ok(Some(update.progress))
    }

    fn release<F: CardFrame>(
        &mut self,
        frame: &mut F,
        event: &PointerEvent,
    ) -> Result<Option<f64>, SwipeError> {
        if self.active_session(event).is_none() {
            return Ok(None);
        }
        let Some(mut session) = self.session.take() else {
            return Ok(None);
        };
        self.active_pointer = None;

        let release = session.on_release(event.global_position)?;
        frame.animate_to(&release.target);
        if release.result.is_exit() {
            self.pending_exit = Some(release.result);
        } else {
            self.listener.on_card_result(release.result);
        }
        Ok(Some(release.progress))
    }

    fn cancel<F: CardFrame>(
        &mut self,
        frame: &mut F,
        event: &PointerEvent,
    ) -> Result<(), SwipeError> {
        if self.active_session(event).is_none() {
            return Ok(());
        }
        let Some(mut session) = self.session.take() else {
            return Ok(());
        };
        self.active_pointer = None;

        let target = session.cancel()?;
        frame.animate_to(&target);
        Ok(())
    }

    fn active_session(&self, event: &PointerEvent) -> Option<&DragSession> {
        let session = match self.session.as_ref() {
            Some(session) => session,
            None => {
                log::debug!("{:?} event with no active drag session", event.kind);
                return None;
            }
        };
        if self.active_pointer != Some(event.id) {
            log::trace!("ignoring {:?} from pointer {}", event.kind, event.id);
            return None;
        }
        Some(session)
    }
}

impl<L> std::fmt::Debug for SwipeController<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwipeController")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("active_pointer", &self.active_pointer)
            .field("pending_exit", &self.pending_exit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
