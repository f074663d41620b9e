//! Error types for CPCV split generation.
//!
//! All configuration problems are permanent: the computation is a pure
//! function of its parameters, so an invalid configuration never becomes
//! valid on retry. Each variant names the offending parameter so callers
//! can fail fast with an actionable message.

use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CpcvError>;

/// Errors produced during configuration validation, persistence, or export.
#[derive(Debug, thiserror::Error)]
pub enum CpcvError {
    /// `n_ticks` must be positive.
    #[error("n_ticks must be positive (got 0)")]
    ZeroTicks,

    /// `n_folds` must be positive.
    #[error("n_folds must be positive (got 0)")]
    ZeroFolds,

    /// More folds requested than ticks available; folds would be empty
    /// and the fold-width division would be zero.
    #[error("n_folds ({n_folds}) must not exceed n_ticks ({n_ticks})")]
    TooManyFolds { n_folds: usize, n_ticks: usize },

    /// `n_test_folds` outside `[1, n_folds)`: at least one fold must be
    /// held out, and at least one must remain for training.
    #[error("n_test_folds ({n_test_folds}) must be in [1, n_folds) with n_folds = {n_folds}")]
    InvalidTestFolds { n_test_folds: usize, n_folds: usize },

    /// Filesystem failure while reading/writing a config or export file.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML (de)serialization failure for a config file.
    #[error("TOML error: {0}")]
    Toml(String),

    /// JSON (de)serialization failure for a config or metadata file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// NumPy export failure.
    #[error("npy write error: {0}")]
    Npy(String),
}

impl CpcvError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CpcvError::Io {
            path: path.into(),
            source,
        }
    }
}
