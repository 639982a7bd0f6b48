//! Shape primitives over `image::RgbaImage`
//!
//! Shapes are described by an inclusive pixel bounding box and written with
//! `put_pixel` (no blending, no anti-aliasing). Anything outside the image is
//! clipped.

use image::{Rgba, RgbaImage};

/// Inclusive pixel bounding box. Signed so that degenerate layouts
/// (e.g. `size - margin - 1` for tiny sizes) stay representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl BoundingBox {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        BoundingBox { x0, y0, x1, y1 }
    }

    /// Box of radius `r` around `(cx, cy)`
    pub fn around(cx: i64, cy: i64, r: i64) -> Self {
        BoundingBox::new(cx - r, cy - r, cx + r, cy + r)
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    fn center(&self) -> (f64, f64) {
        (
            (self.x0 + self.x1) as f64 / 2.0,
            (self.y0 + self.y1) as f64 / 2.0,
        )
    }

    fn radii(&self) -> (f64, f64) {
        (
            (self.x1 - self.x0 + 1) as f64 / 2.0,
            (self.y1 - self.y0 + 1) as f64 / 2.0,
        )
    }

    /// Pixel rows/columns of this box that fall inside a `width` x `height` image
    fn clipped(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(width as i64 - 1);
        let y1 = self.y1.min(height as i64 - 1);
        if x1 < x0 || y1 < y0 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

#[inline]
fn ellipse_distance(dx: f64, dy: f64, rx: f64, ry: f64) -> f64 {
    (dx / rx).powi(2) + (dy / ry).powi(2)
}

/// Fill the ellipse inscribed in `bbox`
pub fn fill_ellipse(img: &mut RgbaImage, bbox: BoundingBox, color: Rgba<u8>) {
    if bbox.is_empty() {
        return;
    }
    let Some((x0, y0, x1, y1)) = bbox.clipped(img.width(), img.height()) else {
        return;
    };

    let (cx, cy) = bbox.center();
    let (rx, ry) = bbox.radii();

    for y in y0..=y1 {
        for x in x0..=x1 {
            if ellipse_distance(x as f64 - cx, y as f64 - cy, rx, ry) <= 1.0 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Stroke part of the ellipse outline inscribed in `bbox`.
///
/// Angles are in degrees, clockwise from the positive x axis (image y grows
/// downward), so `0..=180` is the lower half. The stroke grows inward from
/// the ellipse boundary by `width` pixels.
pub fn stroke_arc(
    img: &mut RgbaImage,
    bbox: BoundingBox,
    start_deg: f64,
    end_deg: f64,
    width: u32,
    color: Rgba<u8>,
) {
    if bbox.is_empty() || width == 0 {
        return;
    }
    let Some((x0, y0, x1, y1)) = bbox.clipped(img.width(), img.height()) else {
        return;
    };

    let (cx, cy) = bbox.center();
    let (rx, ry) = bbox.radii();
    let (inner_rx, inner_ry) = (rx - width as f64, ry - width as f64);
    let solid = inner_rx <= 0.0 || inner_ry <= 0.0;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if ellipse_distance(dx, dy, rx, ry) > 1.0 {
                continue;
            }
            if !solid && ellipse_distance(dx, dy, inner_rx, inner_ry) <= 1.0 {
                continue;
            }

            let mut angle = dy.atan2(dx).to_degrees();
            if angle < 0.0 {
                angle += 360.0;
            }
            if angle >= start_deg && angle <= end_deg {
                img.put_pixel(x, y, color);
            }
        }
    }
}
