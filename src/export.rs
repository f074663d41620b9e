//! Split map export.
//!
//! Writes the generated membership maps to disk for Python/PyTorch
//! consumers:
//!
//! - `test_map.npy` / `embargo_map.npy` — boolean matrices of shape
//!   `(n_ticks, n_simulations)` in NumPy format
//! - `metadata.json` — the analytic summary plus the per-simulation
//!   test-fold roster, so downstream code can recover which folds each
//!   column holds out without re-deriving the enumeration
//!
//! # Example
//!
//! ```ignore
//! use cpcv::{CpcvSplitter, SplitExporter};
//!
//! let maps = splitter.split();
//! let exporter = SplitExporter::new("output/cpcv");
//! exporter.export(&splitter, &maps)?;
//! ```

use crate::error::{CpcvError, Result};
use crate::splitter::{CpcvSplitter, SplitMaps, SplitSummary};
use ndarray_npy::WriteNpyExt;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Metadata sidecar written next to the `.npy` masks.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExportMetadata {
    /// Analytic counts for the exported split.
    pub summary: SplitSummary,

    /// Test-fold indices of each simulation, in column order.
    pub simulations: Vec<Vec<usize>>,
}

/// Writes split maps and metadata to an output directory.
pub struct SplitExporter {
    output_dir: PathBuf,
}

impl SplitExporter {
    /// Create an exporter targeting `output_dir`. The directory is
    /// created on export if missing.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Write `test_map.npy`, `embargo_map.npy`, and `metadata.json`.
    pub fn export(&self, splitter: &CpcvSplitter, maps: &SplitMaps) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| CpcvError::io(&self.output_dir, e))?;

        self.write_npy(&maps.test, "test_map.npy")?;
        self.write_npy(&maps.embargo, "embargo_map.npy")?;

        let metadata = ExportMetadata {
            summary: splitter.summary(),
            simulations: splitter
                .simulations()
                .iter()
                .map(|s| s.test_folds.clone())
                .collect(),
        };
        let path = self.output_dir.join("metadata.json");
        let json = serde_json::to_string_pretty(&metadata)?;
        fs::write(&path, json).map_err(|e| CpcvError::io(&path, e))?;

        Ok(())
    }

    fn write_npy(&self, array: &ndarray::Array2<bool>, name: &str) -> Result<()> {
        let path = self.output_dir.join(name);
        let file = File::create(&path).map_err(|e| CpcvError::io(&path, e))?;
        array
            .write_npy(BufWriter::new(file))
            .map_err(|e| CpcvError::Npy(e.to_string()))?;
        Ok(())
    }
}
