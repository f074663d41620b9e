//! Combinatorial Purged Cross-Validation
//!
//! Split-mask generation for evaluating models on time-ordered data
//! without leaking information across time-adjacent partitions.
//!
//! # Overview
//!
//! Given `n_ticks` ordered observations, the crate partitions them into
//! `n_folds` contiguous blocks, enumerates every combination of
//! `n_test_folds` blocks as a held-out test set, and for each combination
//! ("simulation") emits tick-level boolean masks marking test membership
//! and embargoed ticks. The embargo excludes ticks adjacent in time to a
//! test fold, which could otherwise leak into training through
//! autocorrelation.
//!
//! Reference: Lopez de Prado, "Advances in Financial Machine Learning",
//! 2018, Chapter 12.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        cpcv                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  config/    - parameters, validation, TOML/JSON persistence │
//! │  folds/     - fold assignment, combination enumeration      │
//! │  embargo/   - embargo fold derivation per simulation        │
//! │  splitter/  - tick-level test / embargo map materialization │
//! │  export/    - NumPy + JSON export for Python consumers      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate only emits masks; it never loads, splits, or fits anything.
//! Callers apply the masks to their own dataset: for simulation `k`, test
//! rows are where the test column is true, training rows are where both
//! columns are false.
//!
//! # Example
//!
//! ```
//! use cpcv::{CpcvConfig, CpcvSplitter, EmbargoConfig};
//!
//! let config = CpcvConfig::new(1000, 10, 2, EmbargoConfig::symmetric(5));
//! let splitter = CpcvSplitter::new(config)?;
//! let maps = splitter.split();
//!
//! assert_eq!(maps.n_simulations(), 45); // C(10, 2)
//! // Simulation 0 holds out folds (0, 1): 200 test ticks, 5 embargoed.
//! assert_eq!(maps.train_ticks(0).len(), 795);
//! # Ok::<(), cpcv::CpcvError>(())
//! ```

pub mod config;
pub mod embargo;
pub mod error;
pub mod export;
pub mod folds;
pub mod prelude;
pub mod splitter;

// Re-exports - Config
pub use config::{CpcvConfig, EmbargoConfig};

// Re-exports - Errors
pub use error::{CpcvError, Result};

// Re-exports - Folds
pub use folds::{enumerate_combinations, n_combinations, FoldAssignment};

// Re-exports - Embargo
pub use embargo::EmbargoFolds;

// Re-exports - Splitter
pub use splitter::{CpcvSplitter, Simulation, SplitMaps, SplitSummary};

// Re-exports - Export
pub use export::{ExportMetadata, SplitExporter};
