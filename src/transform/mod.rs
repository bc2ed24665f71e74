//! Pure transforms: each takes a source [`Image`] and returns a new one.
//!
//! Geometry-changing transforms (rotate, scale, crop) recompute the
//! header's `image_size` and `size` fields; the rest copy the header as is.

mod channels;
mod geometry;
mod resample;

pub use channels::{Channels, extract, extract_channels};
pub use geometry::{flip_horizontal, flip_vertical, rotate_left, rotate_right};
pub use resample::{crop, scale, scale_with_limits};

use crate::bmp::Header;
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::PixelPlane;

/// One transform step, for callers that dispatch on a parsed command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    FlipHorizontal,
    FlipVertical,
    RotateRight,
    RotateLeft,
    Scale(f64),
    Crop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    Extract(Channels),
}

impl Transform {
    pub fn apply(&self, image: &Image) -> Result<Image, BmpError> {
        self.apply_with_limits(image, &Limits::default())
    }

    /// Apply this step, failing with [`BmpError::LimitExceeded`] before
    /// allocating an output that exceeds `limits`.
    ///
    /// Only scaling and quarter turns can produce a width or height the
    /// source does not already have; the other steps are not checked.
    pub fn apply_with_limits(&self, image: &Image, limits: &Limits) -> Result<Image, BmpError> {
        match *self {
            Transform::FlipHorizontal => flip_horizontal(image),
            Transform::FlipVertical => flip_vertical(image),
            Transform::RotateRight => {
                limits.check_plane(image.height(), image.width())?;
                rotate_right(image)
            }
            Transform::RotateLeft => {
                limits.check_plane(image.height(), image.width())?;
                rotate_left(image)
            }
            Transform::Scale(factor) => scale_with_limits(image, factor, limits),
            Transform::Crop {
                x,
                y,
                width,
                height,
            } => crop(image, x, y, width, height),
            Transform::Extract(channels) => extract_channels(image, channels),
        }
    }
}

/// Run `steps` in order, each on the previous step's output.
pub fn apply_all(image: &Image, steps: &[Transform]) -> Result<Image, BmpError> {
    apply_all_with_limits(image, steps, &Limits::default())
}

/// [`apply_all`] with every step checked against `limits`.
pub fn apply_all_with_limits(
    image: &Image,
    steps: &[Transform],
    limits: &Limits,
) -> Result<Image, BmpError> {
    let mut current = image.clone();
    for step in steps {
        current = step.apply_with_limits(&current, limits)?;
    }
    Ok(current)
}

fn require_pixels(image: &Image, op: &str) -> Result<(), BmpError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(BmpError::InvalidArgument(format!(
            "cannot {op} a {}x{} image",
            image.width(),
            image.height()
        )));
    }
    Ok(())
}

/// Fill a fresh plane for `header` by pulling, for every destination
/// `(x, y)`, the source pixel at `source_of(x, y)`.
fn remap<F>(src: &Image, header: Header, mut source_of: F) -> Result<Image, BmpError>
where
    F: FnMut(usize, usize) -> (usize, usize),
{
    let mut plane = PixelPlane::new(header.width, header.height)?;
    for y in 0..header.height as usize {
        for x in 0..header.width as usize {
            let (sx, sy) = source_of(x, y);
            *plane.pixel_at_mut(x, y, false)? = *src.plane().pixel_at(sx, sy, false)?;
        }
    }
    Image::from_parts(header, plane)
}
