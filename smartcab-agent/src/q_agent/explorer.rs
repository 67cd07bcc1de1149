//! Epsilon-greedy action selection.
use crate::{QTable, State};
use rand::{seq::SliceRandom, Rng};
use smartcab_core::{Action, SmartcabError};

/// How to pick among actions tied for the row maximum.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TieBreak {
    /// Uniformly at random.
    Uniform,

    /// The first tied action in catalogue order.
    FirstIndex,
}

/// Epsilon-greedy explorer over a [`QTable`].
#[derive(Debug, PartialEq, Clone)]
pub struct EpsilonGreedy {
    /// Tie-breaking rule used when exploiting.
    pub tie_break: TieBreak,
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self::new(TieBreak::Uniform)
    }
}

impl EpsilonGreedy {
    /// Constructs epsilon-greedy explorer.
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// Takes an action in `state`.
    ///
    /// Without `learning` the action is uniform over `valid_actions` and the
    /// table is not read. With `learning`, the action is uniform over
    /// `valid_actions` with probability `epsilon` and greedy otherwise. A
    /// negative `epsilon` never explores.
    ///
    /// Exploiting requires the row of `state` to exist.
    pub fn action<R: Rng>(
        &self,
        table: &QTable,
        state: &State,
        learning: bool,
        epsilon: f64,
        valid_actions: &[Action],
        rng: &mut R,
    ) -> Result<Action, SmartcabError> {
        if !learning || rng.gen::<f64>() < epsilon {
            return Self::random(valid_actions, rng);
        }

        let unknown = || SmartcabError::UnknownState(state.to_string());
        match self.tie_break {
            TieBreak::Uniform => {
                let ties = table.argmax_actions(state).ok_or_else(unknown)?;
                ties.choose(rng).copied().ok_or_else(unknown)
            }
            TieBreak::FirstIndex => table.first_argmax(state).ok_or_else(unknown),
        }
    }

    fn random<R: Rng>(
        valid_actions: &[Action],
        rng: &mut R,
    ) -> Result<Action, SmartcabError> {
        valid_actions
            .choose(rng)
            .copied()
            .ok_or(SmartcabError::NoValidActions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::encode;
    use rand::{rngs::SmallRng, SeedableRng};
    use smartcab_core::Direction;

    fn state() -> State {
        encode(Direction::Left, true, None, None)
    }

    fn table_with(values: &[(Action, f64)]) -> QTable {
        let mut table = QTable::new();
        table.ensure_state(state(), true);
        for (a, v) in values {
            table.set(&state(), *a, *v).unwrap();
        }
        table
    }

    #[test]
    fn test_unique_max_is_deterministic() {
        let table = table_with(&[(Action::Right, 1.0)]);
        let explorer = EpsilonGreedy::default();
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..1000 {
            let a = explorer
                .action(&table, &state(), true, 0.0, &Action::ALL, &mut rng)
                .unwrap();
            assert_eq!(a, Action::Right);
        }
    }

    #[test]
    fn test_ties_are_broken_uniformly() {
        let table = table_with(&[(Action::Idle, 3.0), (Action::Left, 3.0)]);
        let explorer = EpsilonGreedy::new(TieBreak::Uniform);
        let mut rng = SmallRng::seed_from_u64(7);
        let (mut idle, mut left) = (0, 0);

        for _ in 0..4000 {
            match explorer
                .action(&table, &state(), true, 0.0, &Action::ALL, &mut rng)
                .unwrap()
            {
                Action::Idle => idle += 1,
                Action::Left => left += 1,
                a => panic!("{} is not tied for the maximum", a),
            }
        }
        assert!((1700..=2300).contains(&idle), "idle = {}", idle);
        assert!((1700..=2300).contains(&left), "left = {}", left);
    }

    #[test]
    fn test_first_index_tie_break() {
        let table = table_with(&[(Action::Left, 3.0), (Action::Right, 3.0)]);
        let explorer = EpsilonGreedy::new(TieBreak::FirstIndex);
        let mut rng = SmallRng::seed_from_u64(1);

        for _ in 0..100 {
            let a = explorer
                .action(&table, &state(), true, 0.0, &Action::ALL, &mut rng)
                .unwrap();
            assert_eq!(a, Action::Left);
        }
    }

    #[test]
    fn test_not_learning_ignores_table() {
        let explorer = EpsilonGreedy::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let valid = [Action::Idle, Action::Right];

        for _ in 0..200 {
            let a = explorer
                .action(&QTable::new(), &state(), false, 0.0, &valid, &mut rng)
                .unwrap();
            assert!(valid.contains(&a));
        }
    }

    #[test]
    fn test_full_exploration_uses_valid_actions() {
        let table = table_with(&[(Action::Forward, 100.0)]);
        let explorer = EpsilonGreedy::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let valid = [Action::Left, Action::Right];

        for _ in 0..200 {
            let a = explorer
                .action(&table, &state(), true, 1.0, &valid, &mut rng)
                .unwrap();
            assert!(valid.contains(&a));
        }
    }

    #[test]
    fn test_negative_epsilon_exploits() {
        let table = table_with(&[(Action::Forward, 1.0)]);
        let explorer = EpsilonGreedy::default();
        let mut rng = SmallRng::seed_from_u64(5);

        for _ in 0..100 {
            let a = explorer
                .action(&table, &state(), true, -0.3, &Action::ALL, &mut rng)
                .unwrap();
            assert_eq!(a, Action::Forward);
        }
    }

    #[test]
    fn test_contract_violations() {
        let explorer = EpsilonGreedy::default();
        let mut rng = SmallRng::seed_from_u64(0);

        assert!(matches!(
            explorer.action(&QTable::new(), &state(), true, 0.0, &Action::ALL, &mut rng),
            Err(SmartcabError::UnknownState(_))
        ));
        assert_eq!(
            explorer.action(&QTable::new(), &state(), false, 0.0, &[], &mut rng),
            Err(SmartcabError::NoValidActions)
        );
    }
}
