use crate::error::{Result, SimulationError};

/// Largest amount of pulls a budget may convert to.
pub const MAX_PULLS: u32 = 600;
pub const ORUNDUMS_PER_PULL: u64 = 600;
pub const ORUNDUMS_PER_PRIME: u64 = 180;

/// Simulation is capped at roughly this many pulls in total.
const PULL_BUDGET: u32 = 20_000_000;
const MAX_TRIALS: u32 = 1_000_000;

/// Banner kinds and their rate-up chance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Banner {
    #[default]
    Standard,
    Limited,
}

impl Banner {
    /// Percent chance that a success is a rate-up.
    pub fn rate_up_threshold(self) -> u32 {
        match self {
            Banner::Standard => 50,
            Banner::Limited => 70,
        }
    }
}

/// Pulls on hand plus the currencies that convert into pulls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PullBudget {
    pub pulls: u32,
    pub orundums: u32,
    pub originite_prime: u32,
}

impl PullBudget {
    #[must_use]
    pub fn new(pulls: u32) -> Self {
        Self {
            pulls,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn orundums(mut self, amount: u32) -> Self {
        self.orundums = amount;
        self
    }

    #[must_use]
    pub fn originite_prime(mut self, amount: u32) -> Self {
        self.originite_prime = amount;
        self
    }

    /// Whole pulls the budget buys: 600 orundums per pull, one originite
    /// prime is worth 180 orundums. Fractions are dropped only once, after
    /// everything is summed.
    pub fn total_pulls(&self) -> u64 {
        let orundums = u64::from(self.pulls) * ORUNDUMS_PER_PULL
            + u64::from(self.orundums)
            + u64::from(self.originite_prime) * ORUNDUMS_PER_PRIME;
        orundums / ORUNDUMS_PER_PULL
    }

    /// The total amount of pulls, if it lies in `1..=MAX_PULLS`.
    pub fn validate(&self) -> Result<u32> {
        match self.total_pulls() {
            0 => Err(SimulationError::NoPulls),
            n if n > u64::from(MAX_PULLS) => Err(SimulationError::TooManyPulls {
                requested: n,
                max: MAX_PULLS,
            }),
            n => Ok(n as u32),
        }
    }
}

/// Trial count that keeps a simulation of `pulls` pulls per trial at about
/// twenty million pulls, with at most a million trials.
///
/// Zero pulls has no per-trial cost and gets the cap; the simulator builder
/// rejects zero pulls before asking for a trial count.
pub fn recommended_trials(pulls: u32) -> u32 {
    match pulls {
        0 => MAX_TRIALS,
        n => (PULL_BUDGET / n).min(MAX_TRIALS),
    }
}
