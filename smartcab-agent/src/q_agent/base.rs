//! Tabular Q agent.
use super::{
    config::QAgentConfig,
    explorer::{EpsilonGreedy, TieBreak},
};
use crate::{
    decay::{DecaySchedule, FLAT_EPSILON_STEP},
    learner::{Learner, PendingTransition},
    QTable, State,
};
use log::{info, trace, warn};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use smartcab_core::{
    record::{Record, RecordValue},
    Action, Agent, Env, SmartcabError,
};

/// Where the agent is inside a time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPhase {
    /// Before the intersection is sensed.
    AwaitingObservation,

    /// The state is encoded and has a row; no action chosen yet.
    AwaitingAction,

    /// The action is handed to the environment.
    AwaitingReward,
}

/// Tabular agent driving with an epsilon-greedy policy.
///
/// Every call to [`Agent::update`] runs, in this order: observe and encode the
/// state, ensure its row in the table, choose an action, apply it to the
/// environment, learn from the reward. Learning therefore lags the chosen
/// action by exactly one reward.
///
/// [`Agent::reset`] marks a trial boundary. The table and the pending
/// transition survive it; epsilon and alpha are annealed, or forced to zero
/// for testing trials.
pub struct QAgent<R = SmallRng> {
    learning: bool,
    epsilon: f64,
    alpha: f64,
    decay: DecaySchedule,
    alpha_decay: DecaySchedule,
    optimized: bool,
    explorer: EpsilonGreedy,
    q_table: QTable,
    learner: Learner,
    state: Option<State>,
    phase: TrialPhase,
    n_trials: usize,
    n_steps: usize,
    rng: R,
}

impl QAgent<SmallRng> {
    /// Constructs the agent with a [`SmallRng`] seeded from the configuration.
    pub fn build(config: QAgentConfig) -> Result<Self, SmartcabError> {
        let rng = SmallRng::seed_from_u64(config.seed);
        Self::build_with_rng(config, rng)
    }
}

impl<R: Rng> QAgent<R> {
    /// Constructs the agent with the given random source.
    pub fn build_with_rng(config: QAgentConfig, rng: R) -> Result<Self, SmartcabError> {
        config.validate()?;
        let tie_break = if config.optimized {
            TieBreak::Uniform
        } else {
            TieBreak::FirstIndex
        };

        Ok(Self {
            learning: config.learning,
            epsilon: config.epsilon,
            alpha: config.alpha,
            decay: config.decay,
            alpha_decay: DecaySchedule::linear(config.alpha_decay),
            optimized: config.optimized,
            explorer: EpsilonGreedy::new(tie_break),
            q_table: QTable::new(),
            learner: Learner::default(),
            state: None,
            phase: TrialPhase::AwaitingObservation,
            n_trials: 0,
            n_steps: 0,
            rng,
        })
    }

    /// Senses the environment and encodes the state.
    pub fn build_state<E: Env>(&self, env: &E) -> State {
        State::from(&env.observe())
    }

    /// Creates the row of `state` when learning.
    pub fn create_q(&mut self, state: State) -> bool {
        self.q_table.ensure_state(state, self.learning)
    }

    /// The maximum estimate in `state`, `None` if the state was never seen.
    pub fn max_q(&self, state: &State) -> Option<f64> {
        self.q_table.max_value(state)
    }

    /// Chooses an action in `state` among `valid_actions`.
    pub fn choose_action(
        &mut self,
        state: &State,
        valid_actions: &[Action],
    ) -> Result<Action, SmartcabError> {
        self.state = Some(*state);
        self.explorer.action(
            &self.q_table,
            state,
            self.learning,
            self.epsilon,
            valid_actions,
            &mut self.rng,
        )
    }

    /// Learns from the pending transition and makes `(state, action, reward)` pending.
    pub fn learn(
        &mut self,
        state: State,
        action: Action,
        reward: f64,
    ) -> Result<(), SmartcabError> {
        if let Some(q) = self.learner.learn(
            &mut self.q_table,
            self.learning,
            self.alpha,
            state,
            action,
            reward,
        )? {
            trace!("Updated estimate: {}", q);
        }
        Ok(())
    }

    /// Anneals epsilon and alpha at a trial boundary.
    ///
    /// A testing trial forces both to zero. Otherwise the optimized agent
    /// applies its decay schedule to epsilon and a linear decay to alpha,
    /// while the flat agent subtracts [`FLAT_EPSILON_STEP`] from epsilon
    /// without a floor and keeps alpha.
    pub fn anneal(&mut self, testing: bool) {
        if testing {
            self.epsilon = 0.0;
            self.alpha = 0.0;
        } else if self.optimized {
            self.epsilon = self.decay.apply(self.epsilon);
            self.alpha = self.alpha_decay.apply(self.alpha);
        } else {
            self.epsilon -= FLAT_EPSILON_STEP;
        }
    }

    /// Exploration rate.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Learning rate.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns `true` in optimized mode.
    pub fn is_optimized(&self) -> bool {
        self.optimized
    }

    /// The value table.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Mutable access to the value table, e.g. to seed estimates.
    pub fn q_table_mut(&mut self) -> &mut QTable {
        &mut self.q_table
    }

    /// The transition waiting for its update.
    pub fn pending(&self) -> Option<&PendingTransition> {
        self.learner.pending()
    }

    /// The state of the last step.
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    /// Where the agent is inside a time step.
    pub fn phase(&self) -> TrialPhase {
        self.phase
    }

    /// The number of trials started.
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// The number of completed steps over all trials.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }
}

impl<E: Env, R: Rng> Agent<E> for QAgent<R> {
    fn is_learning(&self) -> bool {
        self.learning
    }

    fn reset(&mut self, env: &mut E, destination: Option<E::Destination>, testing: bool) {
        env.route_to(destination);
        self.anneal(testing);
        self.n_trials += 1;
        info!(
            "Trial {}: testing = {}, epsilon = {:.4}, alpha = {:.4}, states = {}",
            self.n_trials,
            testing,
            self.epsilon,
            self.alpha,
            self.q_table.len()
        );
    }

    /// Runs one step and returns its record.
    ///
    /// The record holds `reward`, `epsilon` and `alpha` as `f32` scalars and
    /// `action` and `state` as strings. The scalars are rounded snapshots for
    /// reporting; the table learns from the `f64` reward returned by
    /// [`Env::act`].
    fn update(&mut self, env: &mut E) -> Result<Record, SmartcabError> {
        if self.phase != TrialPhase::AwaitingObservation {
            warn!("Previous step stopped at {:?}", self.phase);
        }

        let state = self.build_state(env);
        self.create_q(state);
        self.phase = TrialPhase::AwaitingAction;

        let action = self.choose_action(&state, env.valid_actions())?;
        self.phase = TrialPhase::AwaitingReward;

        let reward = env.act(action)?;
        self.learn(state, action, reward)?;
        self.phase = TrialPhase::AwaitingObservation;
        self.n_steps += 1;
        trace!("Step {}: {} -> {}, reward = {}", self.n_steps, state, action, reward);

        Ok(Record::from_slice(&[
            ("reward", RecordValue::Scalar(reward as f32)),
            ("epsilon", RecordValue::Scalar(self.epsilon as f32)),
            ("alpha", RecordValue::Scalar(self.alpha as f32)),
            ("action", RecordValue::String(action.to_string())),
            ("state", RecordValue::String(state.to_string())),
        ]))
    }
}
