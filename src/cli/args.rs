use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "avanorm", version, about = "AVANORM CLI")]
pub struct CliArgs {
    /// Directory holding the original avatar images
    #[arg(short = 'i', long)]
    pub source_dir: Option<PathBuf>,

    /// Directory that receives the generated `<id>-<size>` files
    #[arg(short = 'o', long)]
    pub dest_dir: Option<PathBuf>,

    /// Target square sizes in pixels, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = [512u32, 256, 128, 64])]
    pub sizes: Vec<u32>,

    /// Catalog JSON file (defaults to the built-in avatar table)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
