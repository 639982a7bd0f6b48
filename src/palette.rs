/// Fixed icon colors
use image::Rgba;

/// Outer ring
pub const YELLOW: Rgba<u8> = Rgba([255, 217, 61, 255]);

/// Inner disc, eyes and smile
pub const PINK: Rgba<u8> = Rgba([255, 107, 157, 255]);

/// Face oval
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Canvas background (fully transparent white)
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);
