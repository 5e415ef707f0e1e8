//! The per-(entry, size) crop-then-scale pipeline.
//!
//! Each pass measures the source, center-crops it to a square when needed,
//! scales the square to the target size, and records the outcome. The cropped
//! intermediate lives in a uniquely named temp file that is removed on every
//! exit path, success or failure.
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::{info, warn};

use crate::catalog::AvatarEntry;
use crate::core::processing::crop::center_crop_rect;
use crate::error::{Error, Result};
use crate::io::backend::ImageBackend;
use crate::types::Outcome;

/// Deterministic output path: `<dest>/<id>-<size>.<ext>`, where `<ext>` is the
/// source file's extension lowercased ("png" when absent).
pub fn output_path(dest_dir: &Path, id: &str, size: u32, source: &Path) -> PathBuf {
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "png".to_string());
    dest_dir.join(format!("{id}-{size}.{ext}"))
}

fn temp_suffix(source: &Path) -> String {
    match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{}", ext.to_ascii_lowercase()),
        None => ".png".to_string(),
    }
}

/// Produces one `size x size` output from `source`, center-cropping first when
/// the source is not square. Returns the byte size of the written file.
pub fn process_one_size(
    backend: &dyn ImageBackend,
    source: &Path,
    output: &Path,
    size: u32,
) -> Result<u64> {
    let (width, height) = backend.measure(source)?;
    if width == 0 || height == 0 {
        return Err(Error::Image(format!(
            "source has zero dimension: {width}x{height}"
        )));
    }

    match center_crop_rect(width, height) {
        Some(rect) => {
            let temp = Builder::new()
                .prefix("avanorm-crop-")
                .suffix(&temp_suffix(source))
                .tempfile()?;
            backend.crop(source, temp.path(), rect.x, rect.y, rect.width, rect.height)?;
            backend.scale(temp.path(), output, size, size)?;
            // temp dropped here; deleted whether or not the scale succeeded
        }
        None => backend.scale(source, output, size, size)?,
    }

    Ok(fs::metadata(output)?.len())
}

/// Runs every configured size for one entry. A missing source skips the whole
/// entry via `Error::SourceMissing`; a per-size failure is recorded in its
/// `Outcome` and the remaining sizes still run.
pub fn process_entry(
    backend: &dyn ImageBackend,
    entry: &AvatarEntry,
    source_dir: &Path,
    dest_dir: &Path,
    sizes: &[u32],
) -> Result<Vec<(u32, Outcome)>> {
    let source = source_dir.join(&entry.source_file);
    if !source.exists() {
        return Err(Error::SourceMissing { path: source });
    }

    info!("Processing: {} ({})", entry.id, entry.name);

    let mut outcomes = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let output = output_path(dest_dir, &entry.id, size, &source);
        let outcome = match process_one_size(backend, &source, &output, size) {
            Ok(bytes) => {
                info!(
                    "Created {}px version of {} ({:.1} KB)",
                    size,
                    entry.id,
                    bytes as f64 / 1024.0
                );
                Outcome::Created { bytes }
            }
            Err(e) => {
                warn!("Failed to create {}px version of {}: {}", size, entry.id, e);
                Outcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        outcomes.push((size, outcome));
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_source_extension() {
        let path = output_path(Path::new("/out"), "boy-1", 512, Path::new("/src/Boy.PNG"));
        assert_eq!(path, PathBuf::from("/out/boy-1-512.png"));
    }

    #[test]
    fn output_path_defaults_to_png() {
        let path = output_path(Path::new("/out"), "boy-1", 64, Path::new("/src/Boy"));
        assert_eq!(path, PathBuf::from("/out/boy-1-64.png"));
    }
}
