//! Decay schedules for the exploration and learning rates.
//!
//! A schedule maps the current rate to the rate of the next trial. Every
//! schedule in [`DecaySchedule`] satisfies `0 <= apply(x) <= x` for `x >= 0`;
//! [`DecaySchedule::apply`] panics if that ever fails.
//!
//! The flat annealing of the non-optimized agent is not a schedule: it
//! subtracts [`FLAT_EPSILON_STEP`] without a floor, so epsilon goes negative
//! after enough trials. The explorer treats a negative epsilon as zero.
use serde::{Deserialize, Serialize};
use smartcab_core::SmartcabError;

/// Amount subtracted from epsilon per trial by the non-optimized agent.
pub const FLAT_EPSILON_STEP: f64 = 0.05;

/// Named decay strategies with explicit parameters.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Copy)]
pub enum DecaySchedule {
    /// `x - step`, floored at zero.
    Linear {
        /// Amount subtracted per call.
        step: f64,
    },

    /// `x * factor`.
    Multiplicative {
        /// Shrink factor in `[0, 1]`.
        factor: f64,
    },

    /// `x * exp(-rate)`.
    ///
    /// The factor is the same on every call; it does not depend on how many
    /// trials have elapsed.
    Exponential {
        /// Exponent of the per-call factor.
        rate: f64,
    },
}

impl Default for DecaySchedule {
    fn default() -> Self {
        Self::linear(0.0025)
    }
}

impl DecaySchedule {
    /// Linear decay, floored at zero.
    pub fn linear(step: f64) -> Self {
        Self::Linear { step }
    }

    /// Multiplicative decay.
    pub fn multiplicative(factor: f64) -> Self {
        Self::Multiplicative { factor }
    }

    /// Exponential decay with a constant per-call factor.
    pub fn exponential(rate: f64) -> Self {
        Self::Exponential { rate }
    }

    /// The schedules used when tuning the agent, in the order they were tried.
    pub fn presets() -> [Self; 5] {
        [
            Self::linear(0.0025),
            Self::linear(0.005),
            Self::multiplicative(0.25),
            Self::multiplicative(0.50),
            Self::exponential(0.025),
        ]
    }

    /// Checks the parameters.
    pub fn validate(&self) -> Result<(), SmartcabError> {
        let ok = match *self {
            Self::Linear { step } => step.is_finite() && step >= 0.0,
            Self::Multiplicative { factor } => (0.0..=1.0).contains(&factor),
            Self::Exponential { rate } => rate.is_finite() && rate >= 0.0,
        };

        if ok {
            Ok(())
        } else {
            Err(SmartcabError::InvalidConfig(format!(
                "Decay schedule out of range: {:?}",
                self
            )))
        }
    }

    /// Returns the rate of the next trial.
    pub fn apply(&self, x: f64) -> f64 {
        let y = match *self {
            Self::Linear { step } => {
                if x > step {
                    x - step
                } else {
                    0.0
                }
            }
            Self::Multiplicative { factor } => x * factor,
            Self::Exponential { rate } => x * (-rate).exp(),
        };

        assert!(
            (0.0..=x.max(0.0)).contains(&y),
            "{:?} mapped {} to {}",
            self,
            x,
            y
        );
        y
    }
}
