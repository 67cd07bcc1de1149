//! This module is used for tests.
//!
//! [`DummyEnv`] stands in for the grid-world simulation: it reports a fixed,
//! settable intersection and pays a fixed reward per action.
use crate::{error::SmartcabError, Action, Deadline, Direction, Env, Light, Sense};
use log::trace;

/// Scripted environment.
#[derive(Debug, Clone)]
pub struct DummyEnv {
    waypoint: Direction,
    sense: Sense,
    deadline: Deadline,
    valid_actions: Vec<Action>,
    rewards: [f64; Action::COUNT],
    destination: Option<(i32, i32)>,
    taken: Vec<Action>,
}

impl Default for DummyEnv {
    fn default() -> Self {
        Self {
            waypoint: Direction::Forward,
            sense: Sense::clear(Light::Green),
            deadline: Deadline::Unbounded,
            valid_actions: Action::ALL.to_vec(),
            rewards: [0.0; Action::COUNT],
            destination: None,
            taken: Vec::new(),
        }
    }
}

impl DummyEnv {
    /// Sets the next waypoint.
    pub fn with_waypoint(mut self, v: Direction) -> Self {
        self.waypoint = v;
        self
    }

    /// Sets the intersection inputs.
    pub fn with_sense(mut self, v: Sense) -> Self {
        self.sense = v;
        self
    }

    /// Sets the deadline.
    pub fn with_deadline(mut self, v: Deadline) -> Self {
        self.deadline = v;
        self
    }

    /// Sets the valid actions.
    pub fn with_valid_actions(mut self, v: Vec<Action>) -> Self {
        self.valid_actions = v;
        self
    }

    /// Sets the reward paid for `action`.
    pub fn with_reward(mut self, action: Action, v: f64) -> Self {
        self.rewards[action.index()] = v;
        self
    }

    /// Changes the intersection inputs in place.
    pub fn set_sense(&mut self, v: Sense) {
        self.sense = v;
    }

    /// Changes the next waypoint in place.
    pub fn set_waypoint(&mut self, v: Direction) {
        self.waypoint = v;
    }

    /// Actions applied so far.
    pub fn actions_taken(&self) -> &[Action] {
        &self.taken
    }

    /// The last destination given to [`Env::route_to`].
    pub fn destination(&self) -> Option<(i32, i32)> {
        self.destination
    }
}

impl Env for DummyEnv {
    type Destination = (i32, i32);

    fn next_waypoint(&self) -> Direction {
        self.waypoint
    }

    fn sense(&self) -> Sense {
        self.sense
    }

    fn deadline(&self) -> Deadline {
        self.deadline
    }

    fn valid_actions(&self) -> &[Action] {
        &self.valid_actions
    }

    fn act(&mut self, action: Action) -> Result<f64, SmartcabError> {
        if !self.valid_actions.contains(&action) {
            return Err(SmartcabError::InvalidAction(action));
        }
        if let Deadline::Steps(n) = self.deadline {
            self.deadline = Deadline::Steps(n - 1);
        }
        self.taken.push(action);
        let reward = self.rewards[action.index()];
        trace!("Applied {}, reward = {}", action, reward);
        Ok(reward)
    }

    fn route_to(&mut self, destination: Option<Self::Destination>) {
        self.destination = destination;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_act_rejects_invalid_action() {
        let mut env =
            DummyEnv::default().with_valid_actions(vec![Action::Idle, Action::Forward]);

        assert_eq!(
            env.act(Action::Left),
            Err(SmartcabError::InvalidAction(Action::Left))
        );
        assert!(env.actions_taken().is_empty());
    }

    #[test]
    fn test_act_pays_reward_and_counts_down() {
        let mut env = DummyEnv::default()
            .with_reward(Action::Forward, 2.0)
            .with_deadline(Deadline::Steps(5));

        assert_eq!(env.act(Action::Forward), Ok(2.0));
        assert_eq!(env.act(Action::Idle), Ok(0.0));
        assert_eq!(env.deadline(), Deadline::Steps(3));
        assert_eq!(env.actions_taken(), &[Action::Forward, Action::Idle]);
    }

    #[test]
    fn test_observe_collects_inputs() {
        let sense = Sense {
            light: Light::Red,
            oncoming: Some(Direction::Left),
            left: None,
            right: Some(Direction::Forward),
        };
        let mut env = DummyEnv::default()
            .with_waypoint(Direction::Right)
            .with_sense(sense);
        env.route_to(Some((3, 4)));

        let obs = env.observe();
        assert_eq!(obs.waypoint, Direction::Right);
        assert_eq!(obs.sense, sense);
        assert_eq!(obs.deadline, Deadline::Unbounded);
        assert_eq!(env.destination(), Some((3, 4)));
    }
}
