//! Fold assignment and test-fold combination enumeration.
//!
//! The first two stages of split generation:
//!
//! 1. **Fold assignment** maps every tick index to one of `n_folds`
//!    contiguous fold buckets. Fold width is `n_ticks / n_folds`; the last
//!    fold absorbs the remainder when the division is uneven.
//! 2. **Combination enumeration** generates every way to choose
//!    `n_test_folds` of those folds as a held-out test set, in
//!    lexicographic order of fold-index tuples. Each combination is one
//!    "simulation" and becomes one column of the output maps.
//!
//! # Mathematical Details
//!
//! ```text
//! fold_of(t)      = min(t / (n_ticks / n_folds), n_folds - 1)
//! n_simulations   = C(n_folds, n_test_folds)
//! n_paths         = n_simulations * n_test_folds / n_folds   (truncating)
//! ```
//!
//! `n_paths` is the expected number of reconstructable out-of-sample
//! backtest paths in the CPCV scheme (Lopez de Prado, "Advances in
//! Financial Machine Learning", 2018). It is a report value only and is
//! exact only when `n_folds` evenly divides `n_simulations * n_test_folds`;
//! otherwise the integer division truncates.

use crate::config::CpcvConfig;
use std::ops::Range;

/// Mapping from tick indices to contiguous fold buckets.
///
/// Every tick belongs to exactly one fold; folds are ordered and
/// contiguous in tick order. Built once per splitter and immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldAssignment {
    n_ticks: usize,
    n_folds: usize,
    fold_width: usize,
}

impl FoldAssignment {
    /// Build the assignment from a validated configuration.
    ///
    /// Requires `n_folds <= n_ticks`; [`CpcvConfig::validate`] enforces
    /// this before any splitter is built.
    pub fn new(config: &CpcvConfig) -> Self {
        debug_assert!(config.fold_width() > 0, "n_folds must not exceed n_ticks");
        Self {
            n_ticks: config.n_ticks,
            n_folds: config.n_folds,
            fold_width: config.fold_width(),
        }
    }

    /// Number of ticks covered.
    pub fn n_ticks(&self) -> usize {
        self.n_ticks
    }

    /// Number of folds.
    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    /// Fold bucket for a tick index.
    ///
    /// Integer truncation would push trailing ticks of an uneven layout
    /// past the last fold; the clamp folds them into it instead.
    #[inline]
    pub fn fold_of(&self, tick: usize) -> usize {
        (tick / self.fold_width).min(self.n_folds - 1)
    }

    /// Half-open tick range covered by a fold.
    ///
    /// The last fold extends to `n_ticks`, absorbing the remainder.
    pub fn fold_range(&self, fold: usize) -> Range<usize> {
        debug_assert!(fold < self.n_folds);
        let start = fold * self.fold_width;
        let end = if fold == self.n_folds - 1 {
            self.n_ticks
        } else {
            start + self.fold_width
        };
        start..end
    }

    /// Tick count of every fold, in fold order.
    pub fn fold_sizes(&self) -> Vec<usize> {
        (0..self.n_folds).map(|g| self.fold_range(g).len()).collect()
    }

    /// Fold bucket of every tick, in tick order.
    pub fn tick_folds(&self) -> Vec<usize> {
        (0..self.n_ticks).map(|t| self.fold_of(t)).collect()
    }
}

/// All size-`k` subsets of `{0, .., n-1}` in lexicographic order.
///
/// Each subset is returned as a sorted `Vec<usize>` with no duplicates.
/// The position of a subset in the returned vector is its simulation
/// index `k` throughout the crate. Empty when `k > n`, matching
/// [`n_combinations`].
pub fn enumerate_combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut combinations = Vec::with_capacity(n_combinations(n, k));
    if k > n {
        return combinations;
    }
    let mut current = Vec::with_capacity(k);
    push_combinations(n, k, 0, &mut current, &mut combinations);
    combinations
}

/// Recursive helper: extend `current` with members drawn from `start..n`.
fn push_combinations(
    n: usize,
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    results: &mut Vec<Vec<usize>>,
) {
    if current.len() == k {
        results.push(current.clone());
        return;
    }
    // Leave room for the members still to be chosen.
    let remaining = k - current.len();
    for i in start..=(n - remaining) {
        current.push(i);
        push_combinations(n, k, i + 1, current, results);
        current.pop();
    }
}

/// Binomial coefficient C(n, k), computed multiplicatively.
///
/// Divides at every step to keep intermediates small; each partial
/// product is itself a binomial coefficient, so the division is exact.
pub fn n_combinations(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: usize = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}
