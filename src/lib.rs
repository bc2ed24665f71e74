//! # bmpkit
//!
//! Uncompressed 24-bit BMP decoder and encoder, plus pure image transforms.
//!
//! ## Codec
//!
//! [`decode`] reads the fixed 54-byte header, seeks to the pixel data offset
//! and reads each row, skipping the padding that aligns on-disk rows to 4
//! bytes. Rows are kept in stored order; the in-memory [`PixelPlane`] is
//! unpadded. [`encode`] writes the header verbatim and re-pads each row.
//! `decode(encode(image))` reproduces the header and pixels exactly.
//!
//! ## Transforms
//!
//! Everything in [`transform`] takes an [`Image`] by reference and returns a
//! freshly allocated one: flips, quarter-turn rotations, nearest-neighbor
//! scaling, crops and channel extraction. Transforms that change the
//! dimensions recompute the header's `image_size` and `size` fields.
//!
//! ## Non-Goals
//!
//! - Compressed (RLE, embedded JPEG/PNG), palette-indexed and non-24-bit BMPs
//! - Color-depth conversion
//! - Streaming or partial decode
//!
//! ## Usage
//!
//! ```no_run
//! use std::fs::File;
//! use bmpkit::transform::{self, Transform};
//!
//! let image = bmpkit::decode(File::open("in.bmp")?)?;
//! let steps = [
//!     Transform::RotateRight,
//!     Transform::Scale(0.5),
//!     Transform::Extract("rg".parse()?),
//! ];
//! let out = transform::apply_all(&image, &steps)?;
//! bmpkit::encode(File::create("out.bmp")?, &out)?;
//! # Ok::<(), bmpkit::BmpError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod image;
mod limits;
mod pixel;

pub mod bmp;
pub mod transform;

mod decode;
mod encode;

// Re-exports
pub use bmp::{Header, Permissiveness, decode_header};
pub use decode::{DecodeRequest, decode};
pub use encode::encode;
pub use error::BmpError;
pub use image::Image;
pub use limits::Limits;
pub use pixel::{PIXEL_SIZE, Pixel, PixelPlane, row_stride};
