//! Observation of the environment.
use serde::{Deserialize, Serialize};

/// Relative direction at an intersection.
///
/// Used both for the route planner's next waypoint and for the intent of
/// the other cars sensed at the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Straight ahead.
    Forward,

    /// To the left.
    Left,

    /// To the right.
    Right,
}

/// Traffic light seen from the agent's heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Light {
    /// Stop.
    Red,

    /// Go.
    Green,
}

impl Light {
    /// Returns `true` for [`Light::Green`].
    pub fn is_green(self) -> bool {
        self == Light::Green
    }
}

/// Intersection inputs.
///
/// `oncoming`, `left` and `right` hold the intended direction of the car
/// approaching from that side, or `None` when there is no car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sense {
    /// Traffic light.
    pub light: Light,

    /// Car coming from the opposite direction.
    pub oncoming: Option<Direction>,

    /// Car coming from the left.
    pub left: Option<Direction>,

    /// Car coming from the right.
    pub right: Option<Direction>,
}

impl Sense {
    /// An empty intersection with the given light.
    pub fn clear(light: Light) -> Self {
        Self {
            light,
            oncoming: None,
            left: None,
            right: None,
        }
    }
}

/// Remaining steps before the trial times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deadline {
    /// The number of remaining steps.
    Steps(i64),

    /// No deadline is enforced.
    Unbounded,
}

/// The full raw observation gathered once per time step.
///
/// It is richer than the state an agent learns on; see the state encoder in
/// `smartcab-agent` for what is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Next waypoint given by the route planner.
    pub waypoint: Direction,

    /// Intersection inputs.
    pub sense: Sense,

    /// Remaining deadline.
    pub deadline: Deadline,
}
