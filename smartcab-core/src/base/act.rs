//! Action.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A directive the agent issues at an intersection.
///
/// The catalogue is fixed. Its order, `[Idle, Forward, Left, Right]`, defines
/// the index of each action in a value-table row and the order in which tied
/// actions are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Stay at the intersection.
    #[serde(rename = "none")]
    Idle,

    /// Drive straight through.
    Forward,

    /// Turn left.
    Left,

    /// Turn right.
    Right,
}

impl Action {
    /// The number of actions in the catalogue.
    pub const COUNT: usize = 4;

    /// All actions in catalogue order.
    pub const ALL: [Action; Action::COUNT] =
        [Action::Idle, Action::Forward, Action::Left, Action::Right];

    /// Position of the action in the catalogue.
    pub fn index(self) -> usize {
        match self {
            Action::Idle => 0,
            Action::Forward => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }

    /// Inverse of [`Action::index`].
    pub fn from_index(ix: usize) -> Option<Self> {
        Self::ALL.get(ix).copied()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Idle => "none",
            Action::Forward => "forward",
            Action::Left => "left",
            Action::Right => "right",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_catalogue_order() {
        for (ix, a) in Action::ALL.iter().enumerate() {
            assert_eq!(a.index(), ix);
            assert_eq!(Action::from_index(ix), Some(*a));
        }
        assert_eq!(Action::from_index(Action::COUNT), None);
    }

    #[test]
    fn test_serde_names() {
        let yaml = serde_yaml::to_string(&Action::Idle).unwrap();
        assert!(yaml.contains("none"));
        let a: Action = serde_yaml::from_str("left").unwrap();
        assert_eq!(a, Action::Left);
        assert_eq!(Action::Forward.to_string(), "forward");
    }
}
