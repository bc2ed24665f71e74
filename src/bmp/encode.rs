//! BMP encoder: header verbatim, then padded 24-bit rows.

use std::io::{Seek, SeekFrom, Write};

use super::HEADER_SIZE;
use crate::error::BmpError;
use crate::image::Image;
use crate::pixel::PIXEL_SIZE;

/// Write `image` to `stream`: the header, then each row at `header.offset`
/// followed by zero padding to a 4-byte boundary.
pub(crate) fn write_image<W: Write + Seek>(stream: &mut W, image: &Image) -> Result<(), BmpError> {
    let header = image.header();
    if (header.offset as usize) < HEADER_SIZE {
        return Err(BmpError::InvalidFormat(format!(
            "pixel data offset {} would overwrite the {HEADER_SIZE}-byte header",
            header.offset
        )));
    }

    let row_len = header.width as usize * PIXEL_SIZE;
    let pad_bytes = header.padded_row_len()? - row_len;
    let padding = [0u8; 3];

    let start = stream.stream_position()?;
    stream.write_all(&header.to_bytes())?;
    // `offset` counts from the first header byte, not from stream position 0.
    stream.seek(SeekFrom::Start(start + u64::from(header.offset)))?;

    let bytes = image.plane().as_bytes();
    if row_len > 0 {
        for row in bytes.chunks_exact(row_len) {
            stream.write_all(row)?;
            stream.write_all(&padding[..pad_bytes])?;
        }
    }
    stream.flush()?;
    Ok(())
}
