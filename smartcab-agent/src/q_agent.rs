//! Tabular Q agent.
mod base;
mod config;
mod explorer;
pub use base::{QAgent, TrialPhase};
pub use config::QAgentConfig;
pub use explorer::{EpsilonGreedy, TieBreak};
