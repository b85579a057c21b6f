use crate::{EditWeights, FuzzyMatcher};

/// Builder for [`FuzzyMatcher`].
///
/// ```rust
/// use fuzzy_gacha::FuzzyMatcherBuilder;
///
/// let matcher = FuzzyMatcherBuilder::new()
///     .case_insensitive(true)
///     .build();
///
/// let best = matcher.best("ALICE", ["bob", "alice", "alicia"]).unwrap();
/// assert_eq!((best.distance, best.index), (0, 1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FuzzyMatcherBuilder {
    weights: EditWeights,
    case_insensitive: bool,
}

impl Default for FuzzyMatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcherBuilder {
    /// Starts from the ranking weights `(9, 1, 10)`, case-sensitive.
    #[must_use]
    pub fn new() -> Self {
        Self {
            weights: EditWeights::FUZZY,
            case_insensitive: false,
        }
    }

    /// Replace the edit weights used for ranking.
    #[must_use]
    pub fn weights(mut self, weights: EditWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Enable Unicode‑aware *case‑insensitive* matching.
    #[must_use]
    pub fn case_insensitive(mut self, value: bool) -> Self {
        self.case_insensitive = value;
        self
    }

    #[must_use]
    pub fn build(self) -> FuzzyMatcher {
        FuzzyMatcher {
            weights: self.weights,
            case_insensitive: self.case_insensitive,
        }
    }
}
