use image::RgbaImage;

use crate::palette::{BACKGROUND, PINK, WHITE, YELLOW};
use crate::raster::{fill_ellipse, stroke_arc, BoundingBox};

/// Smile outline thickness in pixels
const SMILE_WIDTH: u32 = 2;

/// Integer layout of the icon for one side length.
///
/// Every value is a truncating fraction of `size` (or of `face`), so the
/// artwork scales with the icon and degenerates quietly for tiny sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: i64,
    /// Width of the yellow ring around the pink disc
    pub margin: i64,
    /// Side of the face oval's bounding box
    pub face: i64,
    pub eye_radius: i64,
    /// Horizontal distance of each eye from the center
    pub eye_dx: i64,
    /// How far the eyes sit above the center
    pub eye_dy: i64,
    pub smile_half_width: i64,
    pub smile_half_height: i64,
    /// Vertical center of the smile ellipse
    pub smile_y: i64,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        let size = size as i64;
        let face = size / 3;
        IconGeometry {
            size,
            margin: size / 8,
            face,
            eye_radius: face / 8,
            eye_dx: face / 4,
            eye_dy: face / 6,
            smile_half_width: face / 3,
            smile_half_height: face / 8,
            smile_y: size / 2 + face / 6,
        }
    }

    pub fn center(&self) -> i64 {
        self.size / 2
    }

    pub fn outer_disc(&self) -> BoundingBox {
        BoundingBox::new(0, 0, self.size - 1, self.size - 1)
    }

    pub fn inner_disc(&self) -> BoundingBox {
        let far = self.size - self.margin - 1;
        BoundingBox::new(self.margin, self.margin, far, far)
    }

    pub fn face_oval(&self) -> BoundingBox {
        let origin = self.center() - self.face / 2;
        BoundingBox::new(origin, origin, origin + self.face, origin + self.face)
    }

    /// Left and right eye boxes
    pub fn eyes(&self) -> [BoundingBox; 2] {
        let c = self.center();
        let y = c - self.eye_dy;
        [
            BoundingBox::around(c - self.eye_dx, y, self.eye_radius),
            BoundingBox::around(c + self.eye_dx, y, self.eye_radius),
        ]
    }

    pub fn smile(&self) -> BoundingBox {
        let c = self.center();
        BoundingBox::new(
            c - self.smile_half_width,
            self.smile_y - self.smile_half_height,
            c + self.smile_half_width,
            self.smile_y + self.smile_half_height,
        )
    }
}

/// Draw the app icon at `size` x `size` pixels.
///
/// Layers, back to front: yellow disc, pink disc, white face, pink eyes,
/// pink smile. Each layer overwrites what is beneath it.
pub fn render_icon(size: u32) -> RgbaImage {
    let geometry = IconGeometry::for_size(size);
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);

    fill_ellipse(&mut img, geometry.outer_disc(), YELLOW);
    fill_ellipse(&mut img, geometry.inner_disc(), PINK);
    fill_ellipse(&mut img, geometry.face_oval(), WHITE);
    for eye in geometry.eyes() {
        fill_ellipse(&mut img, eye, PINK);
    }
    stroke_arc(&mut img, geometry.smile(), 0.0, 180.0, SMILE_WIDTH, PINK);

    tracing::debug!("Rendered {}x{} icon: {:?}", size, size, geometry);
    img
}
