//! Prelude module for convenient imports.
//!
//! ```
//! use cpcv::prelude::*;
//!
//! let config = CpcvConfig::new(100, 5, 2, EmbargoConfig::symmetric(2));
//! let maps = CpcvSplitter::new(config)?.split();
//! # Ok::<(), CpcvError>(())
//! ```

pub use crate::config::{CpcvConfig, EmbargoConfig};
pub use crate::error::{CpcvError, Result};
pub use crate::export::SplitExporter;
pub use crate::splitter::{CpcvSplitter, SplitMaps, SplitSummary};
