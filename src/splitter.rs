//! Combinatorial purged cross-validation split generation.
//!
//! Ties the pipeline stages together: fold assignment, test-fold
//! combination enumeration, embargo fold derivation, and expansion into
//! tick-level boolean membership maps.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        CpcvSplitter                          │
//! ├──────────────────────────────────────────────────────────────┤
//! │  folds      - tick -> fold bucket assignment                 │
//! │  simulations- C(n_folds, n_test_folds) test-fold subsets     │
//! │  embargo    - folds adjacent to each simulation's test set   │
//! │  split()    - (n_ticks x n_simulations) test / embargo maps  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The splitter never touches the caller's data. It emits boolean masks;
//! for simulation `k`, the caller's test set is the ticks where
//! `test_map[(t, k)]` holds and the training set is the ticks where
//! neither map holds. Ticks marked in the embargo map sit adjacent in
//! time to the test folds and must be dropped from training to prevent
//! leakage through autocorrelation.
//!
//! # Example
//!
//! ```
//! use cpcv::{CpcvConfig, CpcvSplitter, EmbargoConfig};
//!
//! let config = CpcvConfig::new(10, 5, 2, EmbargoConfig::symmetric(1));
//! let splitter = CpcvSplitter::new(config)?;
//! let maps = splitter.split();
//!
//! assert_eq!(maps.n_simulations(), 10); // C(5, 2)
//! assert_eq!(maps.test.dim(), (10, 10));
//! # Ok::<(), cpcv::CpcvError>(())
//! ```

use crate::config::CpcvConfig;
use crate::embargo::EmbargoFolds;
use crate::error::Result;
use crate::folds::{enumerate_combinations, FoldAssignment};
use ndarray::Array2;
use std::fmt;

/// One test-fold combination and its derived embargo folds.
///
/// The simulation's position in [`CpcvSplitter::simulations`] is its
/// column index in the output maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulation {
    /// Fold indices held out as the test set, sorted ascending.
    pub test_folds: Vec<usize>,

    /// Folds adjacent to the test set, carrying embargo windows.
    pub embargo_folds: EmbargoFolds,
}

/// Tick-level membership maps for every simulation.
///
/// Both matrices have shape `(n_ticks, n_simulations)`; column `k`
/// corresponds to the `k`-th simulation in lexicographic enumeration
/// order. No entry is ever true in both maps at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMaps {
    /// `(t, k)` is true iff tick `t`'s fold is a test fold of
    /// simulation `k`.
    pub test: Array2<bool>,

    /// `(t, k)` is true iff tick `t` falls inside an embargo window of
    /// simulation `k`.
    pub embargo: Array2<bool>,
}

impl SplitMaps {
    /// Number of ticks (rows).
    pub fn n_ticks(&self) -> usize {
        self.test.nrows()
    }

    /// Number of simulations (columns).
    pub fn n_simulations(&self) -> usize {
        self.test.ncols()
    }

    /// Training membership: true where a tick is neither test nor
    /// embargoed.
    pub fn train_map(&self) -> Array2<bool> {
        let mut train = Array2::from_elem(self.test.dim(), false);
        ndarray::Zip::from(&mut train)
            .and(&self.test)
            .and(&self.embargo)
            .for_each(|tr, &te, &em| *tr = !te && !em);
        train
    }

    /// Test membership of every tick for simulation `k`.
    pub fn test_column(&self, k: usize) -> ndarray::ArrayView1<'_, bool> {
        self.test.column(k)
    }

    /// Embargo membership of every tick for simulation `k`.
    pub fn embargo_column(&self, k: usize) -> ndarray::ArrayView1<'_, bool> {
        self.embargo.column(k)
    }

    /// Tick indices usable for training in simulation `k`.
    pub fn train_ticks(&self, k: usize) -> Vec<usize> {
        (0..self.n_ticks())
            .filter(|&t| !self.test[(t, k)] && !self.embargo[(t, k)])
            .collect()
    }
}

/// Analytic counts reported alongside a split.
///
/// `n_paths` uses the truncating CPCV formula
/// `n_simulations * n_test_folds / n_folds`; it is exact only when the
/// division is even and is informational either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SplitSummary {
    pub n_ticks: usize,
    pub n_folds: usize,
    pub n_test_folds: usize,
    pub n_simulations: usize,
    pub n_paths: usize,
}

impl fmt::Display for SplitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPCV split: {} ticks, {} folds, {} test folds -> {} simulations, {} paths",
            self.n_ticks, self.n_folds, self.n_test_folds, self.n_simulations, self.n_paths
        )
    }
}

/// Combinatorial purged cross-validation splitter.
///
/// Construction validates the configuration and precomputes the fold
/// assignment and the full simulation roster. [`split`](Self::split) is a
/// pure function of that state: it allocates fresh output matrices on
/// every call, so a single instance can be reused freely and repeated
/// calls are bit-identical.
pub struct CpcvSplitter {
    config: CpcvConfig,
    folds: FoldAssignment,
    simulations: Vec<Simulation>,
}

impl CpcvSplitter {
    /// Validate the configuration and precompute the simulation roster.
    pub fn new(config: CpcvConfig) -> Result<Self> {
        config.validate()?;
        let folds = FoldAssignment::new(&config);
        let simulations = enumerate_combinations(config.n_folds, config.n_test_folds)
            .into_iter()
            .map(|test_folds| {
                let embargo_folds = EmbargoFolds::derive(&test_folds, config.n_folds);
                Simulation {
                    test_folds,
                    embargo_folds,
                }
            })
            .collect();
        Ok(Self {
            config,
            folds,
            simulations,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &CpcvConfig {
        &self.config
    }

    /// Tick-to-fold assignment.
    pub fn folds(&self) -> &FoldAssignment {
        &self.folds
    }

    /// Every simulation in lexicographic enumeration order.
    pub fn simulations(&self) -> &[Simulation] {
        &self.simulations
    }

    /// `C(n_folds, n_test_folds)`, the output column count.
    pub fn n_simulations(&self) -> usize {
        self.simulations.len()
    }

    /// Expected out-of-sample path count, truncating formula.
    pub fn n_paths(&self) -> usize {
        self.n_simulations() * self.config.n_test_folds / self.config.n_folds
    }

    /// Analytic counts for reporting.
    pub fn summary(&self) -> SplitSummary {
        SplitSummary {
            n_ticks: self.config.n_ticks,
            n_folds: self.config.n_folds,
            n_test_folds: self.config.n_test_folds,
            n_simulations: self.n_simulations(),
            n_paths: self.n_paths(),
        }
    }

    /// Materialize the test and embargo membership maps.
    ///
    /// For each simulation column: ticks of the test folds are marked in
    /// the test map; the last `pre_days` ticks of each preceding embargo
    /// fold and the first `post_days` ticks of each following embargo
    /// fold are marked in the embargo map. Windows longer than the fold
    /// saturate to the whole fold. Test folds are never embargo folds,
    /// so no tick is marked in both maps for the same column.
    pub fn split(&self) -> SplitMaps {
        let n_ticks = self.config.n_ticks;
        let n_simulations = self.n_simulations();
        let mut test = Array2::from_elem((n_ticks, n_simulations), false);
        let mut embargo = Array2::from_elem((n_ticks, n_simulations), false);

        let pre_days = self.config.embargo.pre_days;
        let post_days = self.config.embargo.post_days;

        for (k, simulation) in self.simulations.iter().enumerate() {
            for &fold in &simulation.test_folds {
                for t in self.folds.fold_range(fold) {
                    test[(t, k)] = true;
                }
            }

            for &fold in &simulation.embargo_folds.preceding {
                let range = self.folds.fold_range(fold);
                // Last pre_days ticks of the fold, saturating at its start.
                let start = range.end - pre_days.min(range.len());
                for t in start..range.end {
                    embargo[(t, k)] = true;
                }
            }

            for &fold in &simulation.embargo_folds.following {
                let range = self.folds.fold_range(fold);
                // First post_days ticks of the fold, saturating at its end.
                let end = range.start + post_days.min(range.len());
                for t in range.start..end {
                    embargo[(t, k)] = true;
                }
            }
        }

        if self.config.verbose {
            let summary = self.summary();
            println!("Num simulations: {}", summary.n_simulations);
            println!("Num paths:       {}", summary.n_paths);
        }

        SplitMaps { test, embargo }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EmbargoConfig;

    fn splitter(
        n_ticks: usize,
        n_folds: usize,
        n_test_folds: usize,
        embargo: EmbargoConfig,
    ) -> CpcvSplitter {
        CpcvSplitter::new(CpcvConfig::new(n_ticks, n_folds, n_test_folds, embargo)).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = CpcvConfig::new(5, 10, 2, EmbargoConfig::symmetric(1));
        assert!(CpcvSplitter::new(config).is_err());
    }

    #[test]
    fn test_simulation_roster() {
        let s = splitter(10, 5, 2, EmbargoConfig::symmetric(1));
        assert_eq!(s.n_simulations(), 10); // C(5, 2)
        assert_eq!(s.simulations()[0].test_folds, vec![0, 1]);
        assert_eq!(s.simulations()[9].test_folds, vec![3, 4]);
    }

    #[test]
    fn test_n_paths() {
        // C(5, 2) * 2 / 5 = 4.
        let s = splitter(10, 5, 2, EmbargoConfig::symmetric(1));
        assert_eq!(s.n_paths(), 4);

        // C(5, 3) * 3 / 5 = 30 / 5 = 6.
        let s = splitter(10, 5, 3, EmbargoConfig::symmetric(1));
        assert_eq!(s.n_paths(), 6);

        // C(7, 2) * 2 / 7 = 42 / 7 = 6.
        let s = splitter(14, 7, 2, EmbargoConfig::symmetric(1));
        assert_eq!(s.n_paths(), 6);
    }

    #[test]
    fn test_n_paths_division_is_exact() {
        // The formula is written with truncating division, but
        // C(n, k) * k = n * C(n-1, k-1), so it never actually truncates.
        use crate::folds::n_combinations;
        for n_folds in 2..=10 {
            for n_test_folds in 1..n_folds {
                let s = splitter(
                    n_folds * 3,
                    n_folds,
                    n_test_folds,
                    EmbargoConfig::symmetric(1),
                );
                assert_eq!(
                    s.n_simulations() * n_test_folds % n_folds,
                    0,
                    "n_paths truncated for ({n_folds}, {n_test_folds})"
                );
                assert_eq!(s.n_paths(), n_combinations(n_folds - 1, n_test_folds - 1));
            }
        }
    }

    #[test]
    fn test_reference_scenario() {
        // n_ticks=10, n_folds=5, n_test_folds=2, embargo=1.
        let s = splitter(10, 5, 2, EmbargoConfig::symmetric(1));
        let maps = s.split();

        // Simulation 0 holds out folds (0, 1): ticks 0..4 are test.
        let test_ticks: Vec<usize> = (0..10).filter(|&t| maps.test[(t, 0)]).collect();
        assert_eq!(test_ticks, vec![0, 1, 2, 3]);

        // Fold 0 has no predecessor and fold 1's predecessor is a test
        // fold, so the only embargo is the first tick of fold 2.
        let embargo_ticks: Vec<usize> = (0..10).filter(|&t| maps.embargo[(t, 0)]).collect();
        assert_eq!(embargo_ticks, vec![4]);
    }

    #[test]
    fn test_test_and_embargo_disjoint() {
        for (n_ticks, n_folds, n_test_folds, days) in
            [(10, 5, 2, 1), (50, 5, 2, 100), (30, 6, 3, 2), (9, 4, 1, 3)]
        {
            let s = splitter(n_ticks, n_folds, n_test_folds, EmbargoConfig::symmetric(days));
            let maps = s.split();
            for k in 0..maps.n_simulations() {
                for t in 0..maps.n_ticks() {
                    assert!(
                        !(maps.test[(t, k)] && maps.embargo[(t, k)]),
                        "tick {t} both test and embargo in simulation {k}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_embargo_saturation() {
        // Window far larger than any fold: entire adjacent folds are
        // embargoed, nothing outside them.
        let s = splitter(10, 5, 1, EmbargoConfig::symmetric(100));
        let maps = s.split();

        // Simulation 2 holds out fold 2 (ticks 4..6); folds 1 and 3 are
        // fully embargoed, folds 0 and 4 untouched.
        let embargo_ticks: Vec<usize> = (0..10).filter(|&t| maps.embargo[(t, 2)]).collect();
        assert_eq!(embargo_ticks, vec![2, 3, 6, 7]);
    }

    #[test]
    fn test_asymmetric_embargo_windows() {
        let s = splitter(20, 5, 1, EmbargoConfig::asymmetric(1, 3));
        let maps = s.split();

        // Simulation 2 holds out fold 2 (ticks 8..12). Preceding window:
        // last 1 tick of fold 1. Following window: first 3 ticks of fold 3.
        let embargo_ticks: Vec<usize> = (0..20).filter(|&t| maps.embargo[(t, 2)]).collect();
        assert_eq!(embargo_ticks, vec![7, 12, 13, 14]);
    }

    #[test]
    fn test_zero_embargo() {
        let s = splitter(10, 5, 2, EmbargoConfig::symmetric(0));
        let maps = s.split();
        assert!(!maps.embargo.iter().any(|&b| b));
    }

    #[test]
    fn test_determinism() {
        let s = splitter(30, 6, 2, EmbargoConfig::symmetric(2));
        let first = s.split();
        let second = s.split();
        assert_eq!(first, second);
    }

    #[test]
    fn test_train_map_complements_test_and_embargo() {
        let s = splitter(10, 5, 2, EmbargoConfig::symmetric(1));
        let maps = s.split();
        let train = maps.train_map();
        for k in 0..maps.n_simulations() {
            for t in 0..maps.n_ticks() {
                assert_eq!(train[(t, k)], !maps.test[(t, k)] && !maps.embargo[(t, k)]);
            }
        }
    }

    #[test]
    fn test_train_ticks_accessor() {
        let s = splitter(10, 5, 2, EmbargoConfig::symmetric(1));
        let maps = s.split();
        // Simulation 0: test {0..4}, embargo {4}; training is the rest.
        assert_eq!(maps.train_ticks(0), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_summary_display() {
        let s = splitter(10, 5, 2, EmbargoConfig::symmetric(1));
        let rendered = s.summary().to_string();
        assert!(rendered.contains("10 simulations"));
        assert!(rendered.contains("4 paths"));
    }
}
