//! Agent.
use super::Env;
use crate::{error::SmartcabError, record::Record};

/// Represents a driving agent interacting with an environment.
///
/// The driving harness calls [`Agent::reset`] at the start of every trial and
/// [`Agent::update`] once per time step.
pub trait Agent<E: Env> {
    /// Return if the agent updates its value estimates.
    fn is_learning(&self) -> bool;

    /// Starts a trial.
    ///
    /// Retargets the route to `destination` and anneals the agent's
    /// parameters. `testing` marks an evaluation-only trial.
    fn reset(&mut self, env: &mut E, destination: Option<E::Destination>, testing: bool);

    /// Runs one time step and returns some information about it.
    fn update(&mut self, env: &mut E) -> Result<Record, SmartcabError>;
}
