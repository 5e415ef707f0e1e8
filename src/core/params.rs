use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_SIZES;

/// Run parameters suitable for config files and embedding callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeParams {
    /// Directory holding the original avatar images
    pub source_dir: PathBuf,
    /// Directory that receives the generated `<id>-<size>.<ext>` files
    pub dest_dir: PathBuf,
    /// Target square sizes in pixels; order is preserved in processing
    pub sizes: Vec<u32>,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            dest_dir: PathBuf::from("avatars"),
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}
