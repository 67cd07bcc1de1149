//! Configuration of [`QAgent`](super::QAgent).
use crate::DecaySchedule;
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use smartcab_core::SmartcabError;
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`QAgent`](super::QAgent).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(default)]
pub struct QAgentConfig {
    /// Whether the agent learns. A non-learning agent drives at random.
    pub learning: bool,

    /// Initial exploration rate.
    pub epsilon: f64,

    /// Initial learning rate.
    pub alpha: f64,

    /// Per-trial decay of epsilon in optimized mode.
    pub decay: DecaySchedule,

    /// Selects scheduled decay with uniform tie-breaking over the flat
    /// `epsilon -= 0.05` annealing with index-based tie-breaking.
    pub optimized: bool,

    /// Per-trial linear decay of alpha in optimized mode.
    pub alpha_decay: f64,

    /// Seed of the agent's random source.
    pub seed: u64,
}

impl Default for QAgentConfig {
    fn default() -> Self {
        Self {
            learning: false,
            epsilon: 1.0,
            alpha: 0.5,
            decay: DecaySchedule::default(),
            optimized: true,
            alpha_decay: 0.0025,
            seed: 42,
        }
    }
}

impl QAgentConfig {
    /// Sets whether the agent learns.
    pub fn learning(mut self, v: bool) -> Self {
        self.learning = v;
        self
    }

    /// Sets the initial exploration rate.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.epsilon = v;
        self
    }

    /// Sets the initial learning rate.
    pub fn alpha(mut self, v: f64) -> Self {
        self.alpha = v;
        self
    }

    /// Sets the decay schedule of epsilon.
    pub fn decay(mut self, v: DecaySchedule) -> Self {
        self.decay = v;
        self
    }

    /// Sets optimized annealing.
    pub fn optimized(mut self, v: bool) -> Self {
        self.optimized = v;
        self
    }

    /// Sets the per-trial decrement of alpha.
    pub fn alpha_decay(mut self, v: f64) -> Self {
        self.alpha_decay = v;
        self
    }

    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Checks that rates lie in `[0, 1]` and decay parameters are valid.
    pub fn validate(&self) -> Result<(), SmartcabError> {
        for (name, v) in [("epsilon", self.epsilon), ("alpha", self.alpha)].iter() {
            if !(0.0..=1.0).contains(v) {
                return Err(SmartcabError::InvalidConfig(format!(
                    "{} must be in [0, 1], got {}",
                    name, v
                )));
            }
        }
        self.decay.validate()?;
        DecaySchedule::linear(self.alpha_decay).validate()
    }

    /// Loads [`QAgentConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path_ = path.as_ref().to_owned();
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let c = serde_yaml::from_reader(rdr)?;
        info!("Load config of Q agent from {}", path_.display());
        Ok(c)
    }

    /// Saves [`QAgentConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path_ = path.as_ref().to_owned();
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        info!("Save config of Q agent into {}", path_.display());
        Ok(())
    }
}
