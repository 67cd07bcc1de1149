//! State encoder.
//!
//! The learning state keeps four features of an [`Observation`]: the next
//! waypoint, whether the light is green, and the intent of the oncoming car
//! and of the car on the left. The deadline and the car on the right are
//! dropped to keep the value table small.
//!
//! The feature set is the key space of [`QTable`](crate::QTable). Changing it
//! invalidates every table learned with the previous encoder.
use smartcab_core::{Direction, Observation};
use std::fmt;

/// Discrete state, the row key of the value table.
///
/// Equality and hashing are by value: two observations with the same kept
/// features share one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    /// Next waypoint.
    pub waypoint: Direction,

    /// The light is green.
    pub light_is_green: bool,

    /// Intent of the oncoming car, if any.
    pub oncoming: Option<Direction>,

    /// Intent of the car on the left, if any.
    pub left: Option<Direction>,
}

/// Builds a state from its features.
pub fn encode(
    waypoint: Direction,
    light_is_green: bool,
    oncoming: Option<Direction>,
    left: Option<Direction>,
) -> State {
    State {
        waypoint,
        light_is_green,
        oncoming,
        left,
    }
}

impl From<&Observation> for State {
    fn from(obs: &Observation) -> Self {
        encode(
            obs.waypoint,
            obs.sense.light.is_green(),
            obs.sense.oncoming,
            obs.sense.left,
        )
    }
}

fn dir(d: Option<Direction>) -> &'static str {
    match d {
        None => "none",
        Some(Direction::Forward) => "forward",
        Some(Direction::Left) => "left",
        Some(Direction::Right) => "right",
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            dir(Some(self.waypoint)),
            self.light_is_green,
            dir(self.oncoming),
            dir(self.left)
        )
    }
}
