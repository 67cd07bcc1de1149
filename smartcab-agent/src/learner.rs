//! One-step value update.
//!
//! The update bootstraps from the reward alone:
//! `q <- (1 - alpha) * q + alpha * reward`. There is no discount factor and
//! no estimate of the next state's value; the next state and action are only
//! kept to become the following pending transition.
use crate::{QTable, State};
use smartcab_core::{Action, SmartcabError};

/// Half of a transition waiting for its update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingTransition {
    /// State the action was taken in.
    pub state: State,

    /// Action taken.
    pub action: Action,

    /// Reward observed for the action.
    pub reward: f64,
}

/// Returns the new estimate.
pub fn value_update(old: f64, alpha: f64, reward: f64) -> f64 {
    (1.0 - alpha) * old + alpha * reward
}

/// Applies the update one step behind the agent.
#[derive(Debug, Clone, Default)]
pub struct Learner {
    pending: Option<PendingTransition>,
}

impl Learner {
    /// The transition waiting for its update.
    pub fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    /// Updates the pending entry and stores `(state, action, reward)` in its place.
    ///
    /// Does nothing when not `learning`. Returns the new estimate of the
    /// pending entry, if one was updated. A NaN or infinite `reward` fails
    /// before anything is updated or stored.
    pub fn learn(
        &mut self,
        table: &mut QTable,
        learning: bool,
        alpha: f64,
        state: State,
        action: Action,
        reward: f64,
    ) -> Result<Option<f64>, SmartcabError> {
        if !learning {
            return Ok(None);
        }
        if !reward.is_finite() {
            return Err(SmartcabError::NonFiniteValue(format!(
                "reward {} for {} in {}",
                reward, action, state
            )));
        }

        let updated = match self.pending {
            Some(p) => {
                let old = table
                    .get(&p.state, p.action)
                    .ok_or_else(|| SmartcabError::UnknownState(p.state.to_string()))?;
                let new = value_update(old, alpha, p.reward);
                table.set(&p.state, p.action, new)?;
                Some(new)
            }
            None => None,
        };

        self.pending = Some(PendingTransition {
            state,
            action,
            reward,
        });
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::encode;
    use smartcab_core::Direction;

    fn state() -> State {
        encode(Direction::Right, false, Some(Direction::Left), None)
    }

    #[test]
    fn test_value_update() {
        assert_eq!(value_update(10.0, 0.5, 0.0), 5.0);
        assert_eq!(value_update(10.0, 0.0, 123.0), 10.0);
        assert_eq!(value_update(0.0, 1.0, -4.0), -4.0);
    }

    #[test]
    fn test_first_call_only_stores() -> Result<(), SmartcabError> {
        let mut table = QTable::new();
        table.ensure_state(state(), true);
        let mut learner = Learner::default();

        assert_eq!(
            learner.learn(&mut table, true, 0.5, state(), Action::Left, 2.0)?,
            None
        );
        assert_eq!(
            learner.pending(),
            Some(&PendingTransition {
                state: state(),
                action: Action::Left,
                reward: 2.0
            })
        );
        assert_eq!(table.get(&state(), Action::Left), Some(0.0));
        Ok(())
    }

    #[test]
    fn test_updates_pending_entry() -> Result<(), SmartcabError> {
        let mut table = QTable::new();
        table.ensure_state(state(), true);
        table.set(&state(), Action::Forward, 10.0)?;
        let mut learner = Learner::default();

        learner.learn(&mut table, true, 0.5, state(), Action::Forward, 0.0)?;
        let new = learner.learn(&mut table, true, 0.5, state(), Action::Idle, 7.0)?;

        assert_eq!(new, Some(5.0));
        assert_eq!(table.get(&state(), Action::Forward), Some(5.0));
        assert_eq!(table.get(&state(), Action::Idle), Some(0.0));
        assert_eq!(learner.pending().map(|p| p.action), Some(Action::Idle));
        Ok(())
    }

    #[test]
    fn test_non_finite_reward_is_rejected() -> Result<(), SmartcabError> {
        let mut table = QTable::new();
        table.ensure_state(state(), true);
        let mut learner = Learner::default();
        learner.learn(&mut table, true, 0.5, state(), Action::Left, 2.0)?;
        let pending = *learner.pending().unwrap();

        for r in [f64::NAN, f64::INFINITY].iter() {
            assert!(matches!(
                learner.learn(&mut table, true, 0.5, state(), Action::Right, *r),
                Err(SmartcabError::NonFiniteValue(_))
            ));
        }
        assert_eq!(learner.pending(), Some(&pending));
        assert_eq!(table.get(&state(), Action::Left), Some(0.0));
        Ok(())
    }

    #[test]
    fn test_zero_alpha_keeps_estimate() -> Result<(), SmartcabError> {
        let mut table = QTable::new();
        table.ensure_state(state(), true);
        table.set(&state(), Action::Right, 10.0)?;
        let mut learner = Learner::default();

        learner.learn(&mut table, true, 0.0, state(), Action::Right, -40.0)?;
        learner.learn(&mut table, true, 0.0, state(), Action::Right, 0.0)?;

        assert_eq!(table.get(&state(), Action::Right), Some(10.0));
        Ok(())
    }

    #[test]
    fn test_not_learning_is_noop() -> Result<(), SmartcabError> {
        let mut table = QTable::new();
        let mut learner = Learner::default();

        assert_eq!(
            learner.learn(&mut table, false, 0.5, state(), Action::Left, 1.0)?,
            None
        );
        assert!(learner.pending().is_none());
        assert!(table.is_empty());
        Ok(())
    }
}
