//! Errors in the library.
use crate::Action;
use thiserror::Error;

/// Errors in the library.
///
/// Every variant is a violated contract between the agent, its environment
/// or its configuration. None of them is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SmartcabError {
    /// The environment was asked to apply an action outside its valid set.
    #[error("Invalid action: {0}")]
    InvalidAction(Action),

    /// The policy was asked to exploit a state that has no row in the value table.
    #[error("Unknown state: {0}")]
    UnknownState(String),

    /// The environment reported an empty set of valid actions.
    #[error("No valid actions")]
    NoValidActions,

    /// A reward or an estimate is NaN or infinite.
    #[error("Non-finite value: {0}")]
    NonFiniteValue(String),

    /// Configuration value out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}
