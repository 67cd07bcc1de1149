#![warn(missing_docs)]
//! Core traits and types for the smartcab learning agent.
//!
//! An agent drives a car through a grid of intersections. This crate holds
//! the vocabulary shared by agents and environments: what the agent senses
//! ([`Observation`]), what it can do ([`Action`]), the [`Env`] it talks to
//! and the [`Agent`] interface a driving harness calls.
pub mod dummy;
pub mod error;
pub mod record;

mod base;
pub use base::{Action, Agent, Deadline, Direction, Env, Light, Observation, Sense};
pub use error::SmartcabError;
