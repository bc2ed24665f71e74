use std::io::{Seek, Write};

use crate::bmp;
use crate::error::BmpError;
use crate::image::Image;

/// Encode `image` as an uncompressed 24-bit BMP.
///
/// The header is written verbatim. The file begins at the stream's current
/// position, and `header.offset` is measured from there. [`crate::decode`]
/// always reads a file from position 0, so output written after a prefix
/// decodes only from a stream that starts where this call started.
/// Partial output is left in `stream` on error.
pub fn encode<W: Write + Seek>(mut stream: W, image: &Image) -> Result<(), BmpError> {
    log::debug!(
        "encoding {}x{} BMP, pixel data at offset {}",
        image.width(),
        image.height(),
        image.header().offset
    );
    bmp::encode::write_image(&mut stream, image)
}
