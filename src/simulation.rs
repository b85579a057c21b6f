//! Monte Carlo simulation of gacha pulls with a soft-pity curve.
//!
//! Every pull rolls a d100 against [`success_chance`]. A success resets the
//! pity counter and rolls a second d100: at or below the rate-up threshold the
//! success is a rate-up, and the parity of that same roll decides which of the
//! two rate-up sides it lands on.

use crate::error::{Result, SimulationError};
use crate::{Banner, recommended_trials};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Pulls without a success before the chance starts to climb.
pub const PITY_FLOOR: u32 = 48;
/// Chance (out of [`DIE_SIDES`]) below the pity floor, and the increment per
/// pull above it.
pub const BASE_CHANCE: u32 = 2;
/// Faces of the die rolled for both the success and the rate-up draw.
pub const DIE_SIDES: u32 = 100;

/// Success chance out of 100 after `since_last_success` failed pulls:
/// `2 * max(1, since - 48)`. Reaches 100 after 98 failures.
#[inline]
pub fn success_chance(since_last_success: u32) -> u32 {
    BASE_CHANCE * since_last_success.saturating_sub(PITY_FLOOR).max(1)
}

#[inline]
fn roll<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=DIE_SIDES)
}

/// Counters of a single trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialOutcome {
    pub successes: u32,
    /// Rate-up successes per side, indexed by the parity of the rate-up roll.
    pub rate_up: [u32; 2],
}

/// Which rate-up sides a trial obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateUpClass {
    None,
    One,
    Both,
}

impl TrialOutcome {
    /// `None` for a trial without any success; such trials are left out of
    /// the classification but still count as trials.
    pub fn classify(&self) -> Option<RateUpClass> {
        if self.successes == 0 {
            return None;
        }
        Some(match self.rate_up {
            [0, 0] => RateUpClass::None,
            [a, b] if a > 0 && b > 0 => RateUpClass::Both,
            _ => RateUpClass::One,
        })
    }
}

/// Runs one trial of `pulls` sequential pulls.
pub fn simulate_trial<R: Rng + ?Sized>(
    rng: &mut R,
    pulls: u32,
    rate_up_threshold: u32,
) -> TrialOutcome {
    let mut outcome = TrialOutcome::default();
    let mut since = 0;
    for _ in 0..pulls {
        if roll(rng) <= success_chance(since) {
            since = 0;
            outcome.successes += 1;
            let r = roll(rng);
            if r <= rate_up_threshold {
                outcome.rate_up[(r & 1) as usize] += 1;
            }
        } else {
            since += 1;
        }
    }
    outcome
}

/// Counters accumulated over many trials.
///
/// Tallies of independent shards can be combined with [`merge`](Self::merge);
/// `trials` includes the trials left out of the classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PullTally {
    pub trials: u64,
    pub total: u64,
    pub none: u64,
    pub one: u64,
    pub both: u64,
}

impl PullTally {
    pub fn record(&mut self, outcome: &TrialOutcome) {
        self.trials += 1;
        self.total += u64::from(outcome.successes);
        match outcome.classify() {
            Some(RateUpClass::None) => self.none += 1,
            Some(RateUpClass::One) => self.one += 1,
            Some(RateUpClass::Both) => self.both += 1,
            None => {}
        }
    }

    pub fn merge(&mut self, other: &PullTally) {
        self.trials += other.trials;
        self.total += other.total;
        self.none += other.none;
        self.one += other.one;
        self.both += other.both;
    }

    /// The five ratios, or `None` if nothing was recorded.
    pub fn summary(&self) -> Option<SimulationSummary> {
        (self.trials > 0).then(|| self.ratios())
    }

    fn ratios(&self) -> SimulationSummary {
        let trials = self.trials as f64;
        SimulationSummary {
            expected: self.total as f64 / trials,
            no_rate_up: self.none as f64 / trials,
            any_rate_up: (self.one + self.both) as f64 / trials,
            specific_rate_up: (self.one as f64 / 2. + self.both as f64) / trials,
            both_rate_up: self.both as f64 / trials,
        }
    }
}

/// Outcome statistics of a simulation, every field a ratio over all trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSummary {
    /// Expected number of successes per trial.
    pub expected: f64,
    pub no_rate_up: f64,
    /// At least one rate-up, on either side.
    pub any_rate_up: f64,
    /// A given side has at least one rate-up. Estimated from the symmetry of
    /// the two sides: half the one-side trials plus the both-side trials.
    pub specific_rate_up: f64,
    pub both_rate_up: f64,
}

impl SimulationSummary {
    #[must_use]
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.expected,
            self.no_rate_up,
            self.any_rate_up,
            self.specific_rate_up,
            self.both_rate_up,
        ]
    }
}

impl From<SimulationSummary> for (f64, f64, f64, f64, f64) {
    fn from(s: SimulationSummary) -> Self {
        (
            s.expected,
            s.no_rate_up,
            s.any_rate_up,
            s.specific_rate_up,
            s.both_rate_up,
        )
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expected amount    = {:.2}", self.expected)?;
        writeln!(f, "P(No rateups)      = {:.2}%", self.no_rate_up * 100.)?;
        writeln!(f, "P(Any rateup)      = {:.2}%", self.any_rate_up * 100.)?;
        writeln!(f, "P(Specific rateup) = {:.2}%", self.specific_rate_up * 100.)?;
        write!(f, "P(Both rateups)    = {:.2}%", self.both_rate_up * 100.)
    }
}

/// A validated pull simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullSimulator {
    trials: u32,
    pulls: u32,
    rate_up_threshold: u32,
    seed: Option<u64>,
}

impl PullSimulator {
    #[must_use]
    pub fn builder() -> PullSimulatorBuilder {
        PullSimulatorBuilder::new()
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn pulls(&self) -> u32 {
        self.pulls
    }

    pub fn rate_up_threshold(&self) -> u32 {
        self.rate_up_threshold
    }

    /// Runs all trials on a generator seeded once for this call, from the
    /// configured seed or from system entropy.
    pub fn run(&self) -> SimulationSummary {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.run_with(&mut rng)
    }

    /// Runs all trials on the given random source.
    pub fn run_with<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationSummary {
        self.tally_with(rng).ratios()
    }

    /// Raw counters of all trials, for callers that shard the work.
    pub fn tally_with<R: Rng + ?Sized>(&self, rng: &mut R) -> PullTally {
        let mut tally = PullTally::default();
        for _ in 0..self.trials {
            tally.record(&simulate_trial(rng, self.pulls, self.rate_up_threshold));
        }
        trace!(
            "simulated {} trials of {} pulls (threshold {}): {:?}",
            self.trials, self.pulls, self.rate_up_threshold, tally
        );
        tally
    }
}

/// Builder for [`PullSimulator`].
///
/// ```rust
/// use fuzzy_gacha::{Banner, PullSimulator};
///
/// let summary = PullSimulator::builder()
///     .pulls(100)
///     .trials(1_000)
///     .banner(Banner::Limited)
///     .seed(7)
///     .build()
///     .unwrap()
///     .run();
///
/// // 100 pulls always pass the point where a success is guaranteed
/// assert!((summary.no_rate_up + summary.any_rate_up - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PullSimulatorBuilder {
    trials: Option<u32>,
    pulls: u32,
    rate_up_threshold: u32,
    seed: Option<u64>,
}

impl Default for PullSimulatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PullSimulatorBuilder {
    /// No pulls yet, standard banner, trial count derived from the pulls.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trials: None,
            pulls: 0,
            rate_up_threshold: Banner::Standard.rate_up_threshold(),
            seed: None,
        }
    }

    /// Number of independent trials. Defaults to
    /// [`recommended_trials`](crate::recommended_trials) for the pulls.
    #[must_use]
    pub fn trials(mut self, trials: u32) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Pulls per trial.
    #[must_use]
    pub fn pulls(mut self, pulls: u32) -> Self {
        self.pulls = pulls;
        self
    }

    /// Percent chance (0..=100) that a success is a rate-up.
    #[must_use]
    pub fn rate_up_threshold(mut self, threshold: u32) -> Self {
        self.rate_up_threshold = threshold;
        self
    }

    #[must_use]
    pub fn banner(self, banner: Banner) -> Self {
        self.rate_up_threshold(banner.rate_up_threshold())
    }

    /// Fixes the seed of the generator, making [`PullSimulator::run`]
    /// reproducible.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<PullSimulator> {
        if self.pulls == 0 {
            return Err(SimulationError::NoPulls);
        }
        if self.rate_up_threshold > DIE_SIDES {
            return Err(SimulationError::ThresholdOutOfRange(self.rate_up_threshold));
        }
        let trials = self
            .trials
            .unwrap_or_else(|| recommended_trials(self.pulls));
        if trials == 0 {
            return Err(SimulationError::NoTrials);
        }
        Ok(PullSimulator {
            trials,
            pulls: self.pulls,
            rate_up_threshold: self.rate_up_threshold,
            seed: self.seed,
        })
    }
}
