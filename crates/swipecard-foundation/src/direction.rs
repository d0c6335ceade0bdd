//! Closed tag sets shared by the gesture core.

/// Horizontal direction attached to a terminal outcome.
///
/// `Center` only ever pairs with a click or a recenter; exits are always
/// `Left` or `Right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Center,
}

/// Terminal classification of a release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndEvent {
    Click,
    Exit,
    Recenter,
}

/// Direction of a frame leaving the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExitDirection {
    Left,
    Right,
}

impl From<ExitDirection> for Direction {
    fn from(direction: ExitDirection) -> Self {
        match direction {
            ExitDirection::Left => Direction::Left,
            ExitDirection::Right => Direction::Right,
        }
    }
}

/// Which half of the frame the initial press landed in.
///
/// Presses in the bottom half tilt the frame the opposite way, as if the
/// card pivots around the finger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TouchZone {
    Top,
    Bottom,
}

impl TouchZone {
    /// Sign applied to the base rotation factor while dragging.
    pub fn drag_rotation_sign(self) -> f64 {
        match self {
            TouchZone::Top => 1.0,
            TouchZone::Bottom => -1.0,
        }
    }

    /// Sign applied to the base rotation factor when exiting in `direction`.
    ///
    /// | zone   | direction | sign |
    /// |--------|-----------|------|
    /// | Top    | Left      | -1   |
    /// | Top    | Right     | +1   |
    /// | Bottom | Left      | +1   |
    /// | Bottom | Right     | -1   |
    pub fn exit_rotation_sign(self, direction: ExitDirection) -> f64 {
        match (self, direction) {
            (TouchZone::Top, ExitDirection::Left) => -1.0,
            (TouchZone::Top, ExitDirection::Right) => 1.0,
            (TouchZone::Bottom, ExitDirection::Left) => 1.0,
            (TouchZone::Bottom, ExitDirection::Right) => -1.0,
        }
    }
}
