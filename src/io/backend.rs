//! The image-tool capability seam.
//!
//! The pipeline only ever asks for three file-level operations: measure, crop,
//! scale. Keeping them behind a trait lets tests substitute a recording fake
//! and assert on the exact rectangles and dimensions requested.
use std::path::Path;

use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{DynamicImage, RgbaImage, imageops};
use tracing::debug;

use crate::error::{Error, Result};

/// Minimal surface of an external image manipulation tool.
///
/// All operations are file based: `crop` and `scale` read `src` and write a
/// new file at `dst`, inferring the output format from the `dst` extension.
pub trait ImageBackend {
    /// Pixel dimensions of the image at `path` as `(width, height)`.
    fn measure(&self, path: &Path) -> Result<(u32, u32)>;

    /// Writes the `width x height` region of `src` at top-left `(x, y)` to `dst`.
    fn crop(&self, src: &Path, dst: &Path, x: u32, y: u32, width: u32, height: u32) -> Result<()>;

    /// Writes `src` scaled to exactly `width x height` to `dst`.
    fn scale(&self, src: &Path, dst: &Path, width: u32, height: u32) -> Result<()>;
}

/// Default backend on the `image` codec stack with `fast_image_resize`
/// convolution resampling (Lanczos3).
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateBackend;

impl ImageBackend for ImageCrateBackend {
    fn measure(&self, path: &Path) -> Result<(u32, u32)> {
        // Header-only read; no full decode
        image::image_dimensions(path).map_err(Error::image)
    }

    fn crop(&self, src: &Path, dst: &Path, x: u32, y: u32, width: u32, height: u32) -> Result<()> {
        let img = image::open(src).map_err(Error::image)?;
        let (src_w, src_h) = (img.width(), img.height());
        if width == 0 || height == 0 {
            return Err(Error::Image(format!(
                "crop rectangle has zero dimension: {width}x{height}"
            )));
        }
        if x + width > src_w || y + height > src_h {
            return Err(Error::Image(format!(
                "crop rectangle {width}x{height}+{x}+{y} exceeds source {src_w}x{src_h}"
            )));
        }

        debug!(
            "Cropping {:?}: {}x{} at ({}, {})",
            src, width, height, x, y
        );
        let cropped = imageops::crop_imm(&img, x, y, width, height).to_image();
        save_rgba(cropped, dst)
    }

    fn scale(&self, src: &Path, dst: &Path, width: u32, height: u32) -> Result<()> {
        let img = image::open(src).map_err(Error::image)?;
        let (src_w, src_h) = (img.width(), img.height());
        if src_w == 0 || src_h == 0 {
            return Err(Error::Image(format!(
                "source has zero dimension: {src_w}x{src_h}"
            )));
        }

        debug!("Scaling {:?}: {}x{} -> {}x{}", src, src_w, src_h, width, height);
        let scaled = resize_rgba(img.into_rgba8(), width, height)?;
        save_rgba(scaled, dst)
    }
}

fn resize_rgba(rgba: RgbaImage, target_w: u32, target_h: u32) -> Result<RgbaImage> {
    let (src_w, src_h) = rgba.dimensions();

    let src_image =
        Image::from_vec_u8(src_w, src_h, rgba.into_raw(), PixelType::U8x4).map_err(Error::resize)?;
    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x4);

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbaImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| Error::Resize("resized buffer has unexpected length".to_string()))
}

fn save_rgba(rgba: RgbaImage, dst: &Path) -> Result<()> {
    let ext = dst
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    // JPEG has no alpha channel; flatten before encoding
    let out = if matches!(ext.as_str(), "jpg" | "jpeg") {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8())
    } else {
        DynamicImage::ImageRgba8(rgba)
    };
    out.save(dst).map_err(Error::image)
}
