use rgb::FromSlice as _;

use crate::error::BmpError;

/// One 24-bit pixel record, channels in on-disk order (blue, green, red).
pub type Pixel = rgb::Bgr<u8>;

/// Bytes per [`Pixel`] record.
pub const PIXEL_SIZE: usize = 3;

/// Byte length of one row of `width` records of `pixel_size` bytes.
///
/// With `pad`, the length is rounded up to the next multiple of 4 (the
/// on-disk row layout). Without it, rows are packed (the in-memory layout).
/// Returns `None` on overflow.
pub fn row_stride(width: usize, pixel_size: usize, pad: bool) -> Option<usize> {
    let packed = width.checked_mul(pixel_size)?;
    if pad {
        packed.checked_add(3).map(|r| r & !3)
    } else {
        Some(packed)
    }
}

/// Allocate a zeroed buffer, reporting allocation failure instead of aborting.
pub(crate) fn try_zeroed(bytes: usize) -> Result<Vec<u8>, BmpError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|_| BmpError::AllocationFailed { bytes })?;
    buf.resize(bytes, 0);
    Ok(buf)
}

/// Row-major plane of [`Pixel`] records, stored unpadded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelPlane {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelPlane {
    /// Allocate a black plane of `width * height` records.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        let bytes = Self::byte_len(width, height)?;
        Ok(Self {
            data: try_zeroed(bytes)?,
            width,
            height,
        })
    }

    /// Wrap an unpadded BGR byte buffer.
    ///
    /// Fails with [`BmpError::InvalidArgument`] if `data` is not exactly
    /// `width * height * 3` bytes long.
    pub fn from_bytes(data: Vec<u8>, width: u32, height: u32) -> Result<Self, BmpError> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(BmpError::InvalidArgument(format!(
                "{width}x{height} plane needs {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a plane from typed pixels.
    pub fn from_pixels(pixels: &[Pixel], width: u32, height: u32) -> Result<Self, BmpError> {
        let mut plane = Self::new(width, height)?;
        if pixels.len() != plane.pixels().len() {
            return Err(BmpError::InvalidArgument(format!(
                "{width}x{height} plane needs {} pixels, got {}",
                plane.pixels().len(),
                pixels.len()
            )));
        }
        plane.pixels_mut().copy_from_slice(pixels);
        Ok(plane)
    }

    pub(crate) fn byte_len(width: u32, height: u32) -> Result<usize, BmpError> {
        row_stride(width as usize, PIXEL_SIZE, false)
            .and_then(|row| row.checked_mul(height as usize))
            .ok_or(BmpError::too_large(width, height))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw unpadded BGR bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn pixels(&self) -> &[Pixel] {
        self.data.as_bgr()
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        self.data.as_bgr_mut()
    }

    /// Row `y`, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[Pixel]> {
        let w = self.width as usize;
        let start = y.checked_mul(w)?;
        self.pixels().get(start..start.checked_add(w)?)
    }

    pub(crate) fn row_bytes_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        let stride = self.width as usize * PIXEL_SIZE;
        let start = y.checked_mul(stride)?;
        self.data.get_mut(start..start.checked_add(stride)?)
    }

    /// Byte offset of `(x, y)`, addressing rows with or without padding.
    ///
    /// The plane itself is unpadded, so `pad = true` only lands inside the
    /// buffer when the row length is already a multiple of 4 or the
    /// address is near the start of the plane.
    fn offset(&self, x: usize, y: usize, pad: bool) -> Result<usize, BmpError> {
        let out_of_bounds = BmpError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        };
        if x >= self.width as usize || y >= self.height as usize {
            return Err(out_of_bounds);
        }
        let off = row_stride(self.width as usize, PIXEL_SIZE, pad)
            .and_then(|stride| stride.checked_mul(y))
            .and_then(|row| row.checked_add(x * PIXEL_SIZE));
        match off {
            Some(off) if off + PIXEL_SIZE <= self.data.len() => Ok(off),
            _ => Err(out_of_bounds),
        }
    }

    /// Pixel at `(x, y)`.
    ///
    /// Fails with [`BmpError::OutOfBounds`] when the coordinates are outside
    /// the plane or the computed offset would read past the buffer.
    pub fn pixel_at(&self, x: usize, y: usize, pad: bool) -> Result<&Pixel, BmpError> {
        let off = self.offset(x, y, pad)?;
        Ok(&self.data[off..off + PIXEL_SIZE].as_bgr()[0])
    }

    pub fn pixel_at_mut(&mut self, x: usize, y: usize, pad: bool) -> Result<&mut Pixel, BmpError> {
        let off = self.offset(x, y, pad)?;
        Ok(&mut self.data[off..off + PIXEL_SIZE].as_bgr_mut()[0])
    }
}
