use std::io::{Read, Seek};

use crate::bmp::{self, Header, Permissiveness};
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;

/// Configurable decode of one BMP stream.
///
/// ```no_run
/// use bmpkit::{DecodeRequest, Limits, Permissiveness};
///
/// let file = std::fs::File::open("in.bmp")?;
/// let limits = Limits { max_pixels: Some(64 << 20), ..Default::default() };
/// let image = DecodeRequest::new(file)
///     .with_limits(&limits)
///     .with_permissiveness(Permissiveness::Strict)
///     .decode()?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok::<(), bmpkit::BmpError>(())
/// ```
pub struct DecodeRequest<'a, R> {
    stream: R,
    limits: Option<&'a Limits>,
    permissiveness: Permissiveness,
}

impl<'a, R: Read + Seek> DecodeRequest<'a, R> {
    pub fn new(stream: R) -> Self {
        Self {
            stream,
            limits: None,
            permissiveness: Permissiveness::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: Permissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    /// Read the header, seek to the pixel data and read every row.
    pub fn decode(mut self) -> Result<Image, BmpError> {
        let header = bmp::decode_header(&mut self.stream)?;
        bmp::decode::validate(&header, self.permissiveness)?;
        check_limits(self.limits, &header)?;
        log::debug!(
            "decoding {}x{} BMP, pixel data at offset {}",
            header.width,
            header.height,
            header.offset
        );
        let plane = bmp::decode::read_rows(&mut self.stream, &header)?;
        Image::from_parts(header, plane)
    }
}

fn check_limits(limits: Option<&Limits>, header: &Header) -> Result<(), BmpError> {
    if let Some(limits) = limits {
        limits.check_plane(header.width, header.height)?;
    }
    Ok(())
}

/// Decode a BMP stream with default settings.
///
/// The stream is rewound before the header is read, so the file must start
/// at position 0 and `offset` is absolute.
pub fn decode<R: Read + Seek>(stream: R) -> Result<Image, BmpError> {
    DecodeRequest::new(stream).decode()
}
