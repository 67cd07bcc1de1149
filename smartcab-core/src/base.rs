//! Core functionalities.
mod act;
mod agent;
mod env;
mod obs;
pub use act::Action;
pub use agent::Agent;
pub use env::Env;
pub use obs::{Deadline, Direction, Light, Observation, Sense};
