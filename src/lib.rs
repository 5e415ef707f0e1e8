#![doc = r#"
AVANORM — an avatar image normalizer.

Takes a catalog of avatar source images and produces, for each entry, one
square output per configured pixel size. Outputs are derived by center-cropping
the source to a square matching its smaller dimension, then scaling to the
target size, so aspect ratio is preserved by cropping rather than stretching.

Quick start
-----------
```rust,no_run
use avanorm::{Catalog, ImageCrateBackend, NormalizeParams, run_catalog};

fn main() -> avanorm::Result<()> {
    let catalog = Catalog::embedded()?;
    let params = NormalizeParams {
        source_dir: "public/images/Avatars".into(),
        dest_dir: "public/avatars".into(),
        sizes: vec![512, 256, 128, 64],
    };

    let report = run_catalog(&ImageCrateBackend, &catalog, &params)?;
    println!(
        "processed={}/{} skipped={} failures={}",
        report.processed, report.total, report.skipped, report.failures
    );
    Ok(())
}
```

Swapping the image tool
-----------------------
The pipeline talks to its image tool through [`ImageBackend`], three file-level
operations (measure, crop, scale). The default [`ImageCrateBackend`] runs on
the `image` and `fast_image_resize` crates; tests substitute a recording fake
to assert on the crop rectangles and target dimensions requested.

Error handling
--------------
All public functions return [`Result`]; match on [`Error`] to handle specific
cases. Missing sources and per-size backend failures are expected conditions
handled inside [`run_catalog`] and surface only as report counters.

Useful modules
--------------
- [`api`] — high-level entrypoints.
- [`catalog`] — the entry table and its loaders.
- [`core`] — run parameters and the crop/scale pipeline.
- [`io`] — the backend trait and default implementation.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod catalog;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use api::run_catalog;
pub use catalog::{AvatarEntry, Catalog};
pub use core::params::NormalizeParams;
pub use core::processing::crop::{CropRect, center_crop_rect};
pub use core::processing::pipeline::{output_path, process_entry, process_one_size};
pub use error::{Error, Result};
pub use io::backend::{ImageBackend, ImageCrateBackend};
pub use types::{DEFAULT_SIZES, Outcome, RunReport, validate_sizes};
