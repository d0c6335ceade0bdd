//! Pure math/data for swipeable card geometry
//!
//! This crate contains the value types (points, sizes, rectangles) that the
//! gesture core and its platform adapters exchange.

mod geometry;

pub use geometry::*;
