//! Nearest-neighbor scaling and rectangular crops.

use super::{remap, require_pixels};
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;

/// Resize by `factor` with nearest-neighbor sampling.
///
/// New dimensions are `round(width * factor)` and `round(height * factor)`.
/// Destination `(i, j)` samples source `(i * width / new_width,
/// j * height / new_height)`, truncating.
pub fn scale(image: &Image, factor: f64) -> Result<Image, BmpError> {
    scale_with_limits(image, factor, &Limits::default())
}

/// [`scale`], failing with [`BmpError::LimitExceeded`] before allocating if
/// the scaled image would exceed `limits`.
pub fn scale_with_limits(image: &Image, factor: f64, limits: &Limits) -> Result<Image, BmpError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(BmpError::InvalidArgument(format!(
            "scale factor must be positive and finite, got {factor}"
        )));
    }
    require_pixels(image, "scale")?;

    let (w, h) = (image.width(), image.height());
    let new_w = scaled_len(w, factor, h)?;
    let new_h = scaled_len(h, factor, w)?;
    if new_w == 0 || new_h == 0 {
        return Err(BmpError::InvalidArgument(format!(
            "scaling {w}x{h} by {factor} leaves no pixels ({new_w}x{new_h})"
        )));
    }

    limits.check_plane(new_w, new_h)?;

    let header = image.header().with_dimensions(new_w, new_h)?;
    log::debug!("scale {w}x{h} by {factor} -> {new_w}x{new_h}");

    let (w, h) = (u64::from(w), u64::from(h));
    let (nw, nh) = (u64::from(new_w), u64::from(new_h));
    remap(image, header, |i, j| {
        ((i as u64 * w / nw) as usize, (j as u64 * h / nh) as usize)
    })
}

fn scaled_len(len: u32, factor: f64, other: u32) -> Result<u32, BmpError> {
    let scaled = (f64::from(len) * factor).round();
    if scaled > f64::from(u32::MAX) {
        return Err(BmpError::DimensionsTooLarge {
            width: scaled as u64,
            height: u64::from(other),
        });
    }
    Ok(scaled as u32)
}

/// Copy the `width` x `height` rectangle whose top-left corner is `(x, y)`.
///
/// Fails with [`BmpError::InvalidArgument`] for an empty rectangle or one
/// that extends past the source.
pub fn crop(image: &Image, x: u32, y: u32, width: u32, height: u32) -> Result<Image, BmpError> {
    if width == 0 || height == 0 {
        return Err(BmpError::InvalidArgument(format!(
            "crop rectangle {width}x{height} is empty"
        )));
    }
    let fits = |start: u32, len: u32, limit: u32| {
        start.checked_add(len).is_some_and(|end| end <= limit)
    };
    if !fits(x, width, image.width()) || !fits(y, height, image.height()) {
        return Err(BmpError::InvalidArgument(format!(
            "crop rectangle {width}x{height} at ({x}, {y}) exceeds the {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let header = image.header().with_dimensions(width, height)?;
    log::debug!(
        "crop {}x{} to {width}x{height} at ({x}, {y})",
        image.width(),
        image.height()
    );
    let (x0, y0) = (x as usize, y as usize);
    remap(image, header, |i, j| (x0 + i, y0 + j))
}
