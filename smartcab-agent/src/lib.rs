#![warn(missing_docs)]
//! Tabular learning agent for the smartcab grid world.
//!
//! [`QAgent`] learns which [`Action`](smartcab_core::Action) to take at an
//! intersection from the rewards paid by an [`Env`](smartcab_core::Env).
//!
//! ```rust
//! use smartcab_agent::{QAgent, QAgentConfig};
//! use smartcab_core::{dummy::DummyEnv, Agent};
//!
//! let config = QAgentConfig::default().learning(true);
//! let mut agent = QAgent::build(config).unwrap();
//! let mut env = DummyEnv::default();
//!
//! agent.reset(&mut env, None, false);
//! let record = agent.update(&mut env).unwrap();
//! assert_eq!(agent.q_table().len(), 1);
//! assert!(record.get_scalar("reward").is_ok());
//! ```
pub mod decay;
pub mod learner;
pub mod q_agent;
pub mod q_table;
pub mod state;
pub use decay::DecaySchedule;
pub use learner::{Learner, PendingTransition};
pub use q_agent::{EpsilonGreedy, QAgent, QAgentConfig, TieBreak, TrialPhase};
pub use q_table::{ActionValues, QTable};
pub use state::{encode, State};
