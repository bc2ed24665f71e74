//! Pixel row decoding for uncompressed 24-bit BMP.

use std::io::{self, Read, Seek, SeekFrom};

use super::{FILE_HEADER_SIZE, Header, INFO_HEADER_SIZE};
use crate::error::BmpError;
use crate::pixel::{PIXEL_SIZE, PixelPlane};

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the BMP decoder validates the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Permissiveness {
    /// Everything `Standard` checks, plus: planes == 1, and the
    /// `image_size` and `size` fields are either zero or consistent
    /// with the dimensions and offset.
    Strict,

    /// Default behavior. Reject headers smaller than BITMAPINFOHEADER,
    /// pixel data offsets that overlap the header, negative dimensions
    /// (top-down row order), and anything other than uncompressed 24-bit.
    #[default]
    Standard,

    /// Check only the signature and read rows as 3-byte records
    /// regardless of what the header claims.
    Permissive,
}

/// Check the header fields `permissiveness` cares about.
pub(crate) fn validate(header: &Header, permissiveness: Permissiveness) -> Result<(), BmpError> {
    if permissiveness == Permissiveness::Permissive {
        if header.bits_per_pixel != 24 || header.compression != 0 {
            log::warn!(
                "reading {}-bit compression={} BMP as uncompressed 24-bit",
                header.bits_per_pixel,
                header.compression
            );
        }
        return Ok(());
    }

    if header.info_size < INFO_HEADER_SIZE {
        return Err(BmpError::InvalidFormat(format!(
            "info header of {} bytes is smaller than BITMAPINFOHEADER",
            header.info_size
        )));
    }
    if header.info_size.saturating_add(FILE_HEADER_SIZE) > header.offset {
        return Err(BmpError::InvalidFormat(format!(
            "pixel data offset {} overlaps the {}-byte header",
            header.offset,
            header.info_size.saturating_add(FILE_HEADER_SIZE)
        )));
    }
    // Both fields are signed on disk.
    if (header.width as i32) < 0 {
        return Err(BmpError::InvalidFormat(format!(
            "negative width {}",
            header.width as i32
        )));
    }
    if (header.height as i32) < 0 {
        return Err(BmpError::UnsupportedVariant(format!(
            "top-down rows (height {})",
            header.height as i32
        )));
    }
    if header.bits_per_pixel != 24 {
        return Err(BmpError::UnsupportedVariant(format!(
            "{}-bit pixels (only 24-bit is supported)",
            header.bits_per_pixel
        )));
    }
    if header.compression != 0 {
        return Err(BmpError::UnsupportedVariant(format!(
            "compression type {}",
            header.compression
        )));
    }

    if permissiveness == Permissiveness::Strict {
        if header.planes != 1 {
            return Err(BmpError::InvalidFormat(format!(
                "color plane count is {}, expected 1",
                header.planes
            )));
        }
        let expected = header.pixel_data_len()?;
        if header.image_size != 0 && header.image_size as usize != expected {
            return Err(BmpError::InvalidFormat(format!(
                "image data size field ({}) doesn't match expected ({expected})",
                header.image_size
            )));
        }
        let expected_size = expected.saturating_add(header.offset as usize);
        if header.size != 0 && header.size as usize != expected_size {
            return Err(BmpError::InvalidFormat(format!(
                "file size field ({}) doesn't match expected ({expected_size})",
                header.size
            )));
        }
    }
    Ok(())
}

/// Seek to the pixel data and read every row into a fresh plane.
///
/// Rows are taken in stored order. Each row is `width` records followed by
/// padding up to a 4-byte boundary; missing padding after a row is
/// tolerated, a short row is not.
pub(crate) fn read_rows<R: Read + Seek>(
    stream: &mut R,
    header: &Header,
) -> Result<PixelPlane, BmpError> {
    let row_len = header.width as usize * PIXEL_SIZE;
    let stride = header.padded_row_len()?;
    check_available(stream, header, row_len, stride)?;

    let mut plane = PixelPlane::new(header.width, header.height)?;
    let padding = (stride - row_len) as u64;
    log::trace!("{} padding bytes per row", padding);

    stream.seek(SeekFrom::Start(u64::from(header.offset)))?;
    if row_len == 0 {
        return Ok(plane);
    }

    for y in 0..header.height {
        let row = plane
            .row_bytes_mut(y as usize)
            .ok_or(BmpError::TruncatedData { row: y })?;
        stream.read_exact(row).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof {
                BmpError::TruncatedData { row: y }
            } else {
                BmpError::Io(e)
            }
        })?;
        if padding > 0 {
            io::copy(&mut stream.by_ref().take(padding), &mut io::sink())?;
        }
    }

    Ok(plane)
}

/// Fail before allocating if the stream cannot hold every row.
fn check_available<R: Seek>(
    stream: &mut R,
    header: &Header,
    row_len: usize,
    stride: usize,
) -> Result<(), BmpError> {
    if row_len == 0 || header.height == 0 {
        return Ok(());
    }
    let end = stream.seek(SeekFrom::End(0))?;
    let available = u128::from(end.saturating_sub(u64::from(header.offset)));
    let (row_len, stride) = (row_len as u128, stride as u128);
    let needed = stride * u128::from(header.height - 1) + row_len;
    if available >= needed {
        return Ok(());
    }
    let first_missing = if available < row_len {
        0
    } else {
        (available - row_len) / stride + 1
    };
    Err(BmpError::TruncatedData {
        row: first_missing as u32,
    })
}
