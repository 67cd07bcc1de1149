//! Records returned by agents.
//!
//! An agent returns a [`Record`] from every time step so that a driving
//! harness can inspect the reward, the chosen action and the current
//! exploration and learning rates without reaching into the agent.
//!
//! ```rust
//! use smartcab_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("reward", RecordValue::Scalar(2.0));
//! record.insert("action", RecordValue::String("forward".to_string()));
//! ```
mod base;

pub use base::{Record, RecordValue};
