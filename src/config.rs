//! Split configuration management.
//!
//! This module provides the configuration for combinatorial purged
//! cross-validation split generation, with serialization support for
//! experiment reproducibility.
//!
//! # Features
//!
//! - **Unified Configuration**: Single struct covering fold layout and
//!   embargo windows
//! - **Serialization**: Save/load configurations to TOML or JSON
//! - **Validation**: Ensure configurations are valid before use
//!
//! # Example
//!
//! ```
//! use cpcv::config::{CpcvConfig, EmbargoConfig};
//!
//! let config = CpcvConfig::new(1000, 10, 2, EmbargoConfig::symmetric(5));
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{CpcvError, Result};
use std::fs;
use std::path::Path;

/// Embargo window lengths, in ticks, on each side of a test fold.
///
/// The window preceding a test fold trims the *end* of the prior fold;
/// the window following a test fold trims the *start* of the next fold.
/// The two sides are independently configurable; use
/// [`EmbargoConfig::symmetric`] for the common equal-length case.
///
/// A window longer than the adjacent fold saturates: the entire fold is
/// embargoed, never more. This is deliberate, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EmbargoConfig {
    /// Ticks embargoed at the end of each fold preceding a test fold.
    pub pre_days: usize,

    /// Ticks embargoed at the start of each fold following a test fold.
    pub post_days: usize,
}

impl EmbargoConfig {
    /// Same embargo length on both sides of a test fold.
    pub fn symmetric(days: usize) -> Self {
        Self {
            pre_days: days,
            post_days: days,
        }
    }

    /// Different embargo lengths for the preceding and following side.
    pub fn asymmetric(pre_days: usize, post_days: usize) -> Self {
        Self {
            pre_days,
            post_days,
        }
    }
}

/// Configuration for combinatorial purged cross-validation.
///
/// Describes how `n_ticks` ordered observations are partitioned into
/// `n_folds` contiguous blocks and how many blocks each simulation holds
/// out as the test set. Everything downstream is derived deterministically
/// from these parameters.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CpcvConfig {
    /// Total number of ordered observations.
    pub n_ticks: usize,

    /// Number of contiguous fold blocks. Must not exceed `n_ticks`.
    pub n_folds: usize,

    /// Folds held out as the test set per simulation. Must be in
    /// `[1, n_folds)`.
    pub n_test_folds: usize,

    /// Print simulation/path counts when generating splits.
    #[serde(default)]
    pub verbose: bool,

    /// Embargo window lengths around test folds. Kept last so the TOML
    /// rendering places the table after the scalar fields.
    pub embargo: EmbargoConfig,
}

impl CpcvConfig {
    /// Create a new configuration. Call [`validate`](Self::validate) (or
    /// construct a splitter, which validates) before relying on it.
    pub fn new(n_ticks: usize, n_folds: usize, n_test_folds: usize, embargo: EmbargoConfig) -> Self {
        Self {
            n_ticks,
            n_folds,
            n_test_folds,
            verbose: false,
            embargo,
        }
    }

    /// Enable informational reporting during split generation.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Width of every fold except the last, which absorbs the remainder
    /// when `n_folds` does not evenly divide `n_ticks`.
    pub fn fold_width(&self) -> usize {
        self.n_ticks / self.n_folds
    }

    /// Validate the configuration.
    ///
    /// Checks the fold layout constraints; embargo lengths are `usize`, so
    /// negative windows are unrepresentable and oversized windows saturate
    /// rather than fail (see [`EmbargoConfig`]).
    pub fn validate(&self) -> Result<()> {
        if self.n_ticks == 0 {
            return Err(CpcvError::ZeroTicks);
        }
        if self.n_folds == 0 {
            return Err(CpcvError::ZeroFolds);
        }
        if self.n_folds > self.n_ticks {
            return Err(CpcvError::TooManyFolds {
                n_folds: self.n_folds,
                n_ticks: self.n_ticks,
            });
        }
        if self.n_test_folds == 0 || self.n_test_folds >= self.n_folds {
            return Err(CpcvError::InvalidTestFolds {
                n_test_folds: self.n_test_folds,
                n_folds: self.n_folds,
            });
        }
        Ok(())
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(self).map_err(|e| CpcvError::Toml(e.to_string()))?;
        fs::write(&path, toml_string).map_err(|e| CpcvError::io(path.as_ref(), e))?;
        Ok(())
    }

    /// Load and validate a configuration from a TOML file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents =
            fs::read_to_string(&path).map_err(|e| CpcvError::io(path.as_ref(), e))?;
        let config: CpcvConfig =
            toml::from_str(&contents).map_err(|e| CpcvError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json_string = serde_json::to_string_pretty(self)?;
        fs::write(&path, json_string).map_err(|e| CpcvError::io(path.as_ref(), e))?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents =
            fs::read_to_string(&path).map_err(|e| CpcvError::io(path.as_ref(), e))?;
        let config: CpcvConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CpcvError;

    fn valid() -> CpcvConfig {
        CpcvConfig::new(100, 10, 2, EmbargoConfig::symmetric(3))
    }

    #[test]
    fn test_valid_config() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_symmetric_embargo() {
        let embargo = EmbargoConfig::symmetric(4);
        assert_eq!(embargo.pre_days, 4);
        assert_eq!(embargo.post_days, 4);
    }

    #[test]
    fn test_asymmetric_embargo() {
        let embargo = EmbargoConfig::asymmetric(2, 7);
        assert_eq!(embargo.pre_days, 2);
        assert_eq!(embargo.post_days, 7);
    }

    #[test]
    fn test_zero_ticks_rejected() {
        let mut config = valid();
        config.n_ticks = 0;
        assert!(matches!(config.validate(), Err(CpcvError::ZeroTicks)));
    }

    #[test]
    fn test_zero_folds_rejected() {
        let mut config = valid();
        config.n_folds = 0;
        assert!(matches!(config.validate(), Err(CpcvError::ZeroFolds)));
    }

    #[test]
    fn test_more_folds_than_ticks_rejected() {
        let config = CpcvConfig::new(5, 10, 2, EmbargoConfig::symmetric(1));
        assert!(matches!(
            config.validate(),
            Err(CpcvError::TooManyFolds {
                n_folds: 10,
                n_ticks: 5
            })
        ));
    }

    #[test]
    fn test_test_folds_bounds() {
        let mut config = valid();
        config.n_test_folds = 0;
        assert!(config.validate().is_err());

        config.n_test_folds = config.n_folds;
        assert!(config.validate().is_err());

        config.n_test_folds = config.n_folds - 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fold_width() {
        let config = CpcvConfig::new(9, 4, 1, EmbargoConfig::symmetric(0));
        assert_eq!(config.fold_width(), 2);

        let config = CpcvConfig::new(10, 5, 2, EmbargoConfig::symmetric(1));
        assert_eq!(config.fold_width(), 2);
    }
}
