use crate::{Cost, FuzzyMatcher, MatchResult, weighted_levenshtein};
use std::borrow::Cow;
use std::collections::BinaryHeap;
use unicode_segmentation::UnicodeSegmentation;

/// Fuzzy candidate ranking
impl FuzzyMatcher {
    #[inline]
    fn graphemes<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
        text.graphemes(true)
            .map(|g| {
                if self.case_insensitive {
                    Cow::Owned(g.to_lowercase())
                } else {
                    Cow::Borrowed(g)
                }
            })
            .collect()
    }

    /// Weighted distance from `query` to a single `candidate`.
    #[must_use]
    pub fn distance(&self, query: &str, candidate: &str) -> Cost {
        weighted_levenshtein(
            &self.graphemes(query),
            &self.graphemes(candidate),
            &self.weights,
        )
    }

    /// Distance of every candidate, in input order.
    fn distances<I>(&self, query: &str, candidates: I) -> impl Iterator<Item = MatchResult>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let query = self.graphemes(query);
        candidates
            .into_iter()
            .enumerate()
            .map(move |(index, candidate)| {
                let candidate = self.graphemes(candidate.as_ref());
                MatchResult::new(
                    weighted_levenshtein(&query, &candidate, &self.weights),
                    index,
                )
            })
    }

    /// The closest candidate, or `None` when there are no candidates.
    ///
    /// Ties keep the first candidate seen.
    ///
    /// ```
    /// use fuzzy_gacha::FuzzyMatcher;
    ///
    /// let best = FuzzyMatcher::default().best("cat", ["cat", "bat", "dog"]);
    /// assert_eq!(best.map(|m| (m.distance, m.index)), Some((0, 0)));
    /// ```
    pub fn best<I>(&self, query: &str, candidates: I) -> Option<MatchResult>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut best: Option<MatchResult> = None;
        for m in self.distances(query, candidates) {
            if best.is_none_or(|b| m.distance < b.distance) {
                best = Some(m);
            }
        }
        best
    }

    /// The `k` closest candidates.
    ///
    /// A max-heap capped at `k` entries keeps the worst of the current best
    /// candidates on top, so it is evicted first. Among equal distances the
    /// larger index is evicted. The result is drained from the heap, worst
    /// first; sort it if ascending order is needed.
    pub fn top_k<I>(&self, query: &str, candidates: I, k: usize) -> Vec<MatchResult>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if k == 0 {
            return Vec::new();
        }

        let mut heap: BinaryHeap<MatchResult> = BinaryHeap::new();
        for m in self.distances(query, candidates) {
            heap.push(m);
            if heap.len() > k {
                let _evicted = heap.pop();
                trace!("top_k: evicted {:?}", _evicted);
            }
        }

        let mut result = Vec::with_capacity(heap.len());
        while let Some(m) = heap.pop() {
            result.push(m);
        }
        result
    }
}
