//! High-level, ergonomic library API: run a whole catalog against a backend
//! and collect a `RunReport`. Prefer these entrypoints over the low-level
//! pipeline functions when embedding AVANORM.
use std::fs;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::core::params::NormalizeParams;
use crate::core::processing::pipeline::process_entry;
use crate::error::{Error, Result};
use crate::io::backend::ImageBackend;
use crate::types::{RunReport, validate_sizes};

/// Processes every catalog entry at every configured size.
///
/// The destination directory is created (with parents) up front; failure
/// there aborts the run since no output could be written at all. A missing
/// source skips its whole entry, a backend failure skips one (entry, size)
/// pair; both are counted in the returned report and never halt the run.
pub fn run_catalog(
    backend: &dyn ImageBackend,
    catalog: &Catalog,
    params: &NormalizeParams,
) -> Result<RunReport> {
    validate_sizes(&params.sizes)?;
    fs::create_dir_all(&params.dest_dir)?;

    info!(
        "Normalizing {} avatar entries into {:?}",
        catalog.len(),
        params.dest_dir
    );

    let mut report = RunReport {
        total: catalog.len(),
        ..RunReport::default()
    };

    for entry in catalog.entries() {
        match process_entry(
            backend,
            entry,
            &params.source_dir,
            &params.dest_dir,
            &params.sizes,
        ) {
            Ok(outcomes) => {
                report.processed += 1;
                report.failures += outcomes.iter().filter(|(_, o)| !o.is_created()).count();
            }
            Err(Error::SourceMissing { path }) => {
                warn!("Source file not found, skipping {}: {:?}", entry.id, path);
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Avatar processing complete: {}/{} entries, {} skipped, {} failed sizes",
        report.processed, report.total, report.skipped, report.failures
    );

    Ok(report)
}
