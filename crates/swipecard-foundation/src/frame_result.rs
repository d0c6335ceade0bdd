use crate::direction::{Direction, EndEvent, ExitDirection};

/// How a released frame finishes.
///
/// Only four outcomes exist, so the (end event, direction) pair is derived
/// rather than stored: a click or recenter is always centered and an exit is
/// always left or right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameResult {
    Click,
    Exit(ExitDirection),
    Recenter,
}

impl FrameResult {
    pub const CLICK: FrameResult = FrameResult::Click;

    /// Exits only when the drag reached full saturation; anything short of
    /// exactly ±1 recenters.
    pub fn from_scroll_progress(progress: f64) -> Self {
        if progress == -1.0 {
            FrameResult::Exit(ExitDirection::Left)
        } else if progress == 1.0 {
            FrameResult::Exit(ExitDirection::Right)
        } else {
            FrameResult::Recenter
        }
    }

    pub const fn click() -> Self {
        Self::CLICK
    }

    pub fn end_event(&self) -> EndEvent {
        match self {
            FrameResult::Click => EndEvent::Click,
            FrameResult::Exit(_) => EndEvent::Exit,
            FrameResult::Recenter => EndEvent::Recenter,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            FrameResult::Exit(direction) => (*direction).into(),
            FrameResult::Click | FrameResult::Recenter => Direction::Center,
        }
    }

    pub fn exit_direction(&self) -> Option<ExitDirection> {
        match self {
            FrameResult::Exit(direction) => Some(*direction),
            FrameResult::Click | FrameResult::Recenter => None,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, FrameResult::Exit(_))
    }
}
