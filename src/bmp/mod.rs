//! BMP header codec and uncompressed 24-bit pixel row codec.
//!
//! Use top-level [`crate::decode`], [`crate::encode`], etc.

pub(crate) mod decode;
pub(crate) mod encode;
mod utils;

use std::io::{Read, Seek, SeekFrom};

use crate::error::BmpError;
use crate::pixel::{PIXEL_SIZE, row_stride};
use utils::{FieldReader, FieldWriter};

pub use decode::Permissiveness;

/// Size of the file header plus BITMAPINFOHEADER, in bytes.
pub const HEADER_SIZE: usize = 54;

/// `"BM"` read as a little-endian `u16`.
pub const SIGNATURE: u16 = 0x4D42;

/// Size of the BITMAPFILEHEADER part.
const FILE_HEADER_SIZE: u32 = 14;

/// Size of a BITMAPINFOHEADER.
const INFO_HEADER_SIZE: u32 = 40;

/// 72 DPI in pixels per meter.
const DEFAULT_RESOLUTION: u32 = 2835;

/// The fixed 54-byte BMP header, field for field as stored on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Header {
    /// Must equal [`SIGNATURE`].
    pub signature: u16,
    /// Total file size in bytes.
    pub size: u32,
    pub reserved: u32,
    /// Byte offset of the pixel rows from the start of the file.
    pub offset: u32,
    /// Size of the info header (40 for BITMAPINFOHEADER).
    pub info_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Size of the padded pixel rows in bytes.
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl Header {
    /// Header for an uncompressed 24-bit image with rows right after the header.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        Header {
            signature: SIGNATURE,
            size: 0,
            reserved: 0,
            offset: HEADER_SIZE as u32,
            info_size: INFO_HEADER_SIZE,
            width: 0,
            height: 0,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: DEFAULT_RESOLUTION,
            y_pixels_per_meter: DEFAULT_RESOLUTION,
            colors_used: 0,
            important_colors: 0,
        }
        .with_dimensions(width, height)
    }

    /// Parse the fixed header block. Only the signature is validated.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Result<Self, BmpError> {
        let mut r = FieldReader::new(bytes);
        let header = Header {
            signature: r.u16(),
            size: r.u32(),
            reserved: r.u32(),
            offset: r.u32(),
            info_size: r.u32(),
            width: r.u32(),
            height: r.u32(),
            planes: r.u16(),
            bits_per_pixel: r.u16(),
            compression: r.u32(),
            image_size: r.u32(),
            x_pixels_per_meter: r.u32(),
            y_pixels_per_meter: r.u32(),
            colors_used: r.u32(),
            important_colors: r.u32(),
        };
        if header.signature != SIGNATURE {
            return Err(BmpError::InvalidFormat(format!(
                "bad signature {:#06x}, expected {SIGNATURE:#06x}",
                header.signature
            )));
        }
        Ok(header)
    }

    /// Serialize to the fixed header block, verbatim.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        let mut w = FieldWriter::new(&mut out);
        w.u16(self.signature);
        w.u32(self.size);
        w.u32(self.reserved);
        w.u32(self.offset);
        w.u32(self.info_size);
        w.u32(self.width);
        w.u32(self.height);
        w.u16(self.planes);
        w.u16(self.bits_per_pixel);
        w.u32(self.compression);
        w.u32(self.image_size);
        w.u32(self.x_pixels_per_meter);
        w.u32(self.y_pixels_per_meter);
        w.u32(self.colors_used);
        w.u32(self.important_colors);
        out
    }

    /// On-disk length of one pixel row, padding included.
    pub fn padded_row_len(&self) -> Result<usize, BmpError> {
        row_stride(self.width as usize, PIXEL_SIZE, true)
            .ok_or(BmpError::too_large(self.width, self.height))
    }

    /// Padded pixel data length implied by `width` and `height`.
    pub fn pixel_data_len(&self) -> Result<usize, BmpError> {
        self.padded_row_len()?
            .checked_mul(self.height as usize)
            .ok_or(BmpError::too_large(self.width, self.height))
    }

    /// Copy of this header resized to `width` x `height`, with
    /// `image_size` and `size` recomputed for the new geometry.
    pub fn with_dimensions(&self, width: u32, height: u32) -> Result<Self, BmpError> {
        let mut header = *self;
        header.width = width;
        header.height = height;
        let image_size = u32::try_from(header.pixel_data_len()?)
            .map_err(|_| BmpError::too_large(width, height))?;
        header.image_size = image_size;
        header.size = header
            .offset
            .checked_add(image_size)
            .ok_or(BmpError::too_large(width, height))?;
        Ok(header)
    }
}

/// Read and validate the fixed header from the start of `stream`.
///
/// The stream is rewound first. Fails with [`BmpError::InvalidFormat`] if
/// fewer than [`HEADER_SIZE`] bytes are available or the signature is wrong.
pub fn decode_header<R: Read + Seek>(mut stream: R) -> Result<Header, BmpError> {
    stream.seek(SeekFrom::Start(0))?;
    let mut block = [0u8; HEADER_SIZE];
    stream.read_exact(&mut block).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            BmpError::InvalidFormat(format!("stream is shorter than the {HEADER_SIZE}-byte header"))
        } else {
            BmpError::Io(e)
        }
    })?;
    Header::from_bytes(&block)
}
