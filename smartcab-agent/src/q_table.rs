//! Value table.
use crate::State;
use log::debug;
use smartcab_core::{Action, SmartcabError};
use std::collections::{hash_map::Iter, HashMap};

/// Estimates of all actions in one state, indexed by [`Action::index`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActionValues([f64; Action::COUNT]);

impl ActionValues {
    /// Estimate of `action`.
    pub fn get(&self, action: Action) -> f64 {
        self.0[action.index()]
    }

    fn set(&mut self, action: Action, v: f64) {
        self.0[action.index()] = v;
    }

    /// The maximum estimate.
    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// All actions attaining the maximum, in catalogue order.
    pub fn argmax(&self) -> Vec<Action> {
        let max = self.max();
        self.iter()
            .filter(|(_, v)| *v == max)
            .map(|(a, _)| a)
            .collect()
    }

    /// The first action in catalogue order attaining the maximum.
    pub fn first_argmax(&self) -> Action {
        let max = self.max();
        self.iter()
            .find(|(_, v)| *v == max)
            .map(|(a, _)| a)
            .unwrap_or(Action::Idle)
    }

    /// Iterates over `(action, estimate)` in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        Action::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

/// Sparse mapping from [`State`] to [`ActionValues`].
///
/// Rows are created lazily with every estimate at 0.0 and are never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QTable {
    rows: HashMap<State, ActionValues>,
}

impl QTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a zeroed row for `state` if `learning` and the row is absent.
    ///
    /// Returns `true` if a row was inserted.
    pub fn ensure_state(&mut self, state: State, learning: bool) -> bool {
        if !learning || self.rows.contains_key(&state) {
            return false;
        }
        debug!("New state {}", state);
        self.rows.insert(state, ActionValues::default());
        true
    }

    /// The maximum estimate in the row of `state`, `None` for an unseen state.
    pub fn max_value(&self, state: &State) -> Option<f64> {
        self.rows.get(state).map(ActionValues::max)
    }

    /// The actions tied for the maximum in the row of `state`.
    pub fn argmax_actions(&self, state: &State) -> Option<Vec<Action>> {
        self.rows.get(state).map(ActionValues::argmax)
    }

    /// The first action, in catalogue order, attaining the row maximum.
    pub fn first_argmax(&self, state: &State) -> Option<Action> {
        self.rows.get(state).map(ActionValues::first_argmax)
    }

    /// Estimate of `action` in `state`.
    pub fn get(&self, state: &State, action: Action) -> Option<f64> {
        self.rows.get(state).map(|row| row.get(action))
    }

    /// Overwrites the estimate of `action` in an existing row.
    ///
    /// A NaN or infinite `v` is rejected and leaves the row unchanged.
    pub fn set(&mut self, state: &State, action: Action, v: f64) -> Result<(), SmartcabError> {
        if !v.is_finite() {
            return Err(SmartcabError::NonFiniteValue(format!(
                "estimate {} for {} in {}",
                v, action, state
            )));
        }
        match self.rows.get_mut(state) {
            Some(row) => {
                row.set(action, v);
                Ok(())
            }
            None => Err(SmartcabError::UnknownState(state.to_string())),
        }
    }

    /// The row of `state`.
    pub fn row(&self, state: &State) -> Option<&ActionValues> {
        self.rows.get(state)
    }

    /// Returns `true` if `state` has a row.
    pub fn contains(&self, state: &State) -> bool {
        self.rows.contains_key(state)
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over rows in arbitrary order.
    pub fn iter(&self) -> Iter<'_, State, ActionValues> {
        self.rows.iter()
    }
}
