//! Image I/O backends. The `backend` module defines the measure/crop/scale
//! capability trait and the default implementation on the `image` codec stack.
pub mod backend;

pub use backend::{ImageBackend, ImageCrateBackend};
