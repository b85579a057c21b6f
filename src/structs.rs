use std::cmp::Ordering;
use std::fmt;

/// A non-negative edit cost.
pub type Cost = usize;

/// Per-operation weights of the edit distance.
///
/// A substitution of an element for itself is never charged, whatever the
/// weights are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditWeights {
    pub deletion: Cost,
    pub insertion: Cost,
    pub substitution: Cost,
}

impl Default for EditWeights {
    fn default() -> Self {
        Self::UNIT
    }
}

impl EditWeights {
    /// Classic Levenshtein weights.
    pub const UNIT: Self = Self::new(1, 1, 1);

    /// Weights used for ranking candidates: deleting or substituting is
    /// expensive, inserting is cheap, so extensions of the query rank first.
    pub const FUZZY: Self = Self::new(9, 1, 10);

    #[must_use]
    pub const fn new(deletion: Cost, insertion: Cost, substitution: Cost) -> Self {
        Self {
            deletion,
            insertion,
            substitution,
        }
    }

    #[must_use]
    pub fn deletion(mut self, cost: Cost) -> Self {
        self.deletion = cost;
        self
    }

    #[must_use]
    pub fn insertion(mut self, cost: Cost) -> Self {
        self.insertion = cost;
        self
    }

    #[must_use]
    pub fn substitution(mut self, cost: Cost) -> Self {
        self.substitution = cost;
        self
    }
}

/// Distance of one candidate from the query, together with its position in
/// the candidate list.
///
/// Ordered by `(distance, index)`, so a `top_k` result can simply be sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchResult {
    pub distance: Cost,
    pub index: usize,
}

impl MatchResult {
    pub(crate) fn new(distance: Cost, index: usize) -> Self {
        Self { distance, index }
    }
}

impl Ord for MatchResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for MatchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<MatchResult> for (Cost, usize) {
    fn from(m: MatchResult) -> Self {
        (m.distance, m.index)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} (distance {})", self.index, self.distance)
    }
}

/// Ranks candidate strings against a query by weighted edit distance.
///
/// Build one with [`FuzzyMatcherBuilder`](crate::FuzzyMatcherBuilder); the
/// default matcher uses [`EditWeights::FUZZY`] and compares case-sensitively.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatcher {
    pub(crate) weights: EditWeights,
    pub(crate) case_insensitive: bool,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            weights: EditWeights::FUZZY,
            case_insensitive: false,
        }
    }
}

impl fmt::Debug for FuzzyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = &mut f.debug_struct("FuzzyMatcher");
        s = s.field("weights", &self.weights);
        if self.case_insensitive {
            s = s.field("case_insensitive", &self.case_insensitive);
        }
        s.finish()
    }
}
