//! Shared types used across AVANORM.
//! Includes the per-variant `Outcome`, the run-level `RunReport`, and
//! target-size validation.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default target sizes in pixels, largest first.
pub const DEFAULT_SIZES: [u32; 4] = [512, 256, 128, 64];

/// Outcome of one (entry, size) pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Output file written; holds its byte size.
    Created { bytes: u64 },
    /// Backend rejected this size; other sizes of the entry still run.
    Failed { reason: String },
}

impl Outcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created { .. })
    }
}

/// Summary counters for a whole catalog run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Entries whose source existed and whose size loop ran.
    pub processed: usize,
    /// Entries skipped because the source file was missing.
    pub skipped: usize,
    /// Individual (entry, size) pairs that failed.
    pub failures: usize,
    /// Entries configured in the catalog.
    pub total: usize,
}

/// Validates a target size list: non-empty, no zero, no duplicates.
/// Order is preserved by callers; this only checks the set.
pub fn validate_sizes(sizes: &[u32]) -> Result<()> {
    if sizes.is_empty() {
        return Err(Error::EmptySizes);
    }
    let mut seen = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if size == 0 {
            return Err(Error::ZeroSize { size });
        }
        if seen.contains(&size) {
            return Err(Error::DuplicateSize { size });
        }
        seen.push(size);
    }
    Ok(())
}
