//! Flips and quarter-turn rotations.

use super::{remap, require_pixels};
use crate::error::BmpError;
use crate::image::Image;

/// Mirror left to right: `dst(x, y) = src(width-1-x, y)`.
pub fn flip_horizontal(image: &Image) -> Result<Image, BmpError> {
    require_pixels(image, "flip")?;
    let w = image.width() as usize;
    log::debug!("flip_horizontal {}x{}", image.width(), image.height());
    remap(image, *image.header(), |x, y| (w - 1 - x, y))
}

/// Mirror top to bottom: `dst(x, y) = src(x, height-1-y)`.
pub fn flip_vertical(image: &Image) -> Result<Image, BmpError> {
    require_pixels(image, "flip")?;
    let h = image.height() as usize;
    log::debug!("flip_vertical {}x{}", image.width(), image.height());
    remap(image, *image.header(), |x, y| (x, h - 1 - y))
}

/// Quarter turn; source column `i` read bottom to top becomes row `i`.
///
/// Output is `height` x `width`, with `dst(j, i) = src(width-1-i, j)`.
pub fn rotate_right(image: &Image) -> Result<Image, BmpError> {
    require_pixels(image, "rotate")?;
    let (w, h) = (image.width(), image.height());
    let header = image.header().with_dimensions(h, w)?;
    log::debug!("rotate_right {w}x{h} -> {h}x{w}");
    let w = w as usize;
    remap(image, header, |j, i| (w - 1 - i, j))
}

/// Quarter turn the other way: `dst(j, i) = src(i, height-1-j)`.
pub fn rotate_left(image: &Image) -> Result<Image, BmpError> {
    require_pixels(image, "rotate")?;
    let (w, h) = (image.width(), image.height());
    let header = image.header().with_dimensions(h, w)?;
    log::debug!("rotate_left {w}x{h} -> {h}x{w}");
    let h = h as usize;
    remap(image, header, |j, i| (i, h - 1 - j))
}
