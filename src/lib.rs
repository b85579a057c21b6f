//! Weighted edit distance with fuzzy candidate ranking, and a Monte Carlo
//! simulator of gacha pulls with soft pity.
//!
//! ```
//! use fuzzy_gacha::{fuzzy_match_best, fuzzy_match_top_k};
//!
//! let names = ["dog", "category", "cat", "bat"];
//! let best = fuzzy_match_best("cat", &names).unwrap();
//! assert_eq!(best.index, 2);
//!
//! let mut top = fuzzy_match_top_k("cat", &names, 2);
//! top.sort();
//! assert_eq!(top.iter().map(|m| m.index).collect::<Vec<_>>(), [2, 1]);
//! ```

#[allow(unused_macros)]
#[cfg(test)]
macro_rules! trace {
    ($($arg:tt)*) => { println!($($arg)*); };
}
#[allow(unused_macros)]
#[cfg(not(test))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

mod banner;
mod builder;
mod distance;
pub mod error;
mod matcher;
mod simulation;
mod structs;

pub use banner::{Banner, MAX_PULLS, PullBudget, recommended_trials};
pub use builder::FuzzyMatcherBuilder;
pub use distance::{edit_distance, typing_accuracy, weighted_levenshtein};
pub use error::SimulationError;
pub use simulation::*;
pub use structs::*;

/// The closest candidate under the ranking weights `(9, 1, 10)`, or `None`
/// for an empty candidate list.
pub fn fuzzy_match_best<I>(query: &str, candidates: I) -> Option<MatchResult>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    FuzzyMatcher::default().best(query, candidates)
}

/// The `amount` closest candidates under the ranking weights `(9, 1, 10)`,
/// in no particular order.
pub fn fuzzy_match_top_k<I>(query: &str, candidates: I, amount: usize) -> Vec<MatchResult>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    FuzzyMatcher::default().top_k(query, candidates, amount)
}

/// Simulates `trials` runs of `pulls` pulls on a generator seeded from system
/// entropy. Use [`PullSimulator::builder`] for a fixed seed.
pub fn simulate_pulls(
    trials: u32,
    pulls: u32,
    rate_up_threshold: u32,
) -> error::Result<SimulationSummary> {
    Ok(PullSimulator::builder()
        .trials(trials)
        .pulls(pulls)
        .rate_up_threshold(rate_up_threshold)
        .build()?
        .run())
}
