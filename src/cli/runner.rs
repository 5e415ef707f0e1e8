use tracing::info;

use avanorm::{Catalog, ImageCrateBackend, NormalizeParams, run_catalog};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let level = if args.log {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let source_dir = args.source_dir.ok_or(AppError::MissingArgument {
        arg: "--source-dir".to_string(),
    })?;
    let dest_dir = args.dest_dir.ok_or(AppError::MissingArgument {
        arg: "--dest-dir".to_string(),
    })?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::embedded()?,
    };

    let params = NormalizeParams {
        source_dir,
        dest_dir,
        sizes: args.sizes,
    };

    let report = run_catalog(&ImageCrateBackend, &catalog, &params)?;

    info!("Generated files in: {:?}", params.dest_dir);
    info!("Total avatars processed: {}/{}", report.processed, report.total);
    if report.skipped > 0 {
        info!("Skipped (missing sources): {}", report.skipped);
    }
    if report.failures > 0 {
        info!("Failed size variants: {}", report.failures);
    }

    Ok(())
}
