/// Crop rectangle in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Computes the centered square crop for a `width x height` source, or `None`
/// when the source is already square and the crop step can be skipped.
///
/// The square side equals the smaller dimension. Offsets use floor division,
/// so an odd margin leans at most one pixel toward the top/left edge.
pub fn center_crop_rect(width: u32, height: u32) -> Option<CropRect> {
    if width == height {
        return None;
    }

    let side = width.min(height);
    if width > height {
        Some(CropRect {
            x: (width - height) / 2,
            y: 0,
            width: side,
            height: side,
        })
    } else {
        Some(CropRect {
            x: 0,
            y: (height - width) / 2,
            width: side,
            height: side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_crops_horizontally() {
        let rect = center_crop_rect(1200, 800).unwrap();
        assert_eq!(
            rect,
            CropRect {
                x: 200,
                y: 0,
                width: 800,
                height: 800
            }
        );
    }

    #[test]
    fn portrait_crops_vertically() {
        let rect = center_crop_rect(800, 1200).unwrap();
        assert_eq!(
            rect,
            CropRect {
                x: 0,
                y: 200,
                width: 800,
                height: 800
            }
        );
    }

    #[test]
    fn square_needs_no_crop() {
        assert_eq!(center_crop_rect(600, 600), None);
    }

    #[test]
    fn odd_margin_floors_toward_left() {
        // (1001 - 800) / 2 = 100.5 floors to 100
        let rect = center_crop_rect(1001, 800).unwrap();
        assert_eq!(rect.x, 100);
        assert_eq!(rect.width, 800);
    }

    #[test]
    fn odd_margin_floors_toward_top() {
        let rect = center_crop_rect(800, 1001).unwrap();
        assert_eq!(rect.y, 100);
        assert_eq!(rect.height, 800);
    }

    #[test]
    fn one_pixel_difference() {
        let rect = center_crop_rect(101, 100).unwrap();
        assert_eq!(
            rect,
            CropRect {
                x: 0,
                y: 0,
                width: 100,
                height: 100
            }
        );
    }
}
