//! Errors raised while configuring a pull simulation.

/// Result type alias using [`SimulationError`].
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Invalid simulation parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    /// Every ratio of the summary is taken over the number of trials.
    #[error("at least one trial is required")]
    NoTrials,

    #[error("you must specify an amount of pulls")]
    NoPulls,

    /// The rate-up threshold is a percentage.
    #[error("rate-up threshold {0} is outside 0..=100")]
    ThresholdOutOfRange(u32),

    #[error("the total amount of pulls must be <= {max}, got {requested}")]
    TooManyPulls {
        /// Pulls the budget converts to.
        requested: u64,
        /// Largest accepted amount.
        max: u32,
    },
}
