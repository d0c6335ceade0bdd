//! Drag-to-swipe gesture core for card stacks.
//!
//! A [`DragSession`] covers one press-to-release cycle on a card frame. Move
//! events produce [`TransformUpdate`]s to apply to the frame, and the release
//! produces a [`Release`] carrying the [`FrameResult`] classification plus the
//! [`ExitTarget`] the frame should animate to. [`SwipeController`] wires the
//! session to pointer events and a platform [`CardFrame`].

mod config;
mod controller;
mod direction;
mod error;
mod frame_geometry;
mod frame_result;
pub mod gesture_constants;
mod input;
mod session;
mod touch;

pub use config::*;
pub use controller::*;
pub use direction::*;
pub use error::*;
pub use frame_geometry::*;
pub use frame_result::*;
pub use input::*;
pub use session::*;
pub use touch::*;

pub use swipecard_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::config::SwipeConfig;
    pub use crate::controller::{CardFrame, CardResultListener, SwipeController};
    pub use crate::direction::{Direction, EndEvent, TouchZone};
    pub use crate::frame_result::FrameResult;
    pub use crate::input::{PointerEvent, PointerEventKind};
    pub use crate::session::{DragSession, Release};
}
