//! Environment.
use super::{Action, Deadline, Direction, Observation, Sense};
use crate::error::SmartcabError;

/// Represents the grid-world simulation seen from one agent.
///
/// The simulation physics, the other cars and the route planner live behind
/// this trait. An agent only reads the intersection and issues actions.
pub trait Env {
    /// Where a trial's route leads.
    type Destination;

    /// Next waypoint given by the route planner.
    fn next_waypoint(&self) -> Direction;

    /// Intersection inputs at the agent's current location.
    fn sense(&self) -> Sense;

    /// Remaining deadline of the current trial.
    fn deadline(&self) -> Deadline;

    /// The actions accepted by [`Env::act`], in catalogue order.
    fn valid_actions(&self) -> &[Action];

    /// Applies an action and returns its reward.
    ///
    /// An action outside [`Env::valid_actions`] is rejected with
    /// [`SmartcabError::InvalidAction`] and leaves the environment untouched.
    fn act(&mut self, action: Action) -> Result<f64, SmartcabError>;

    /// Retargets the route planner. `None` lets the environment pick.
    fn route_to(&mut self, destination: Option<Self::Destination>);

    /// Gathers waypoint, intersection and deadline in one observation.
    fn observe(&self) -> Observation {
        Observation {
            waypoint: self.next_waypoint(),
            sense: self.sense(),
            deadline: self.deadline(),
        }
    }
}
