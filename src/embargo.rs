//! Embargo fold derivation.
//!
//! For each simulation, the folds immediately adjacent to its test folds
//! carry an embargo window: ticks there sit close enough in time to the
//! test set to leak information through autocorrelation, so callers must
//! exclude them from training.
//!
//! Derivation works at fold granularity. For every test fold `g`, the
//! fold `g - 1` (if any) is a preceding candidate and `g + 1` (if any) a
//! following candidate; candidates that are themselves test folds are
//! discarded, because test-fold status dominates embargo status. The
//! boundary folds contribute nothing on their open side.

use std::collections::HashSet;

/// Folds adjacent to a simulation's test folds, split by side.
///
/// Both lists are sorted, deduplicated, and disjoint from the test-fold
/// set. A fold squeezed between two test folds can appear on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbargoFolds {
    /// Folds immediately before a test fold; their trailing ticks are
    /// embargoed.
    pub preceding: Vec<usize>,

    /// Folds immediately after a test fold; their leading ticks are
    /// embargoed.
    pub following: Vec<usize>,
}

impl EmbargoFolds {
    /// Derive the embargo folds for one simulation.
    ///
    /// `test_folds` must hold distinct fold indices below `n_folds`; the
    /// enumeration in [`crate::folds`] guarantees this.
    pub fn derive(test_folds: &[usize], n_folds: usize) -> Self {
        let test_set: HashSet<usize> = test_folds.iter().copied().collect();
        let mut preceding: HashSet<usize> = HashSet::new();
        let mut following: HashSet<usize> = HashSet::new();

        for &g in test_folds {
            if g > 0 {
                preceding.insert(g - 1);
            }
            if g < n_folds - 1 {
                following.insert(g + 1);
            }
        }

        let mut preceding: Vec<usize> = preceding.difference(&test_set).copied().collect();
        let mut following: Vec<usize> = following.difference(&test_set).copied().collect();
        preceding.sort_unstable();
        following.sort_unstable();

        Self {
            preceding,
            following,
        }
    }
}
