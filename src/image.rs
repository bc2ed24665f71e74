use std::io::Cursor;

use crate::bmp::Header;
use crate::error::BmpError;
use crate::pixel::{Pixel, PixelPlane};

/// A decoded BMP: the header it was read with and its pixel plane.
///
/// The plane always holds exactly `header.width * header.height` pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    header: Header,
    plane: PixelPlane,
}

impl Image {
    /// Black `width` x `height` image with a fresh 24-bit header.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        let header = Header::new(width, height)?;
        let plane = PixelPlane::new(width, height)?;
        Ok(Self { header, plane })
    }

    /// Image from row-major pixels, top row first.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Pixel]) -> Result<Self, BmpError> {
        let header = Header::new(width, height)?;
        let plane = PixelPlane::from_pixels(pixels, width, height)?;
        Ok(Self { header, plane })
    }

    /// Pair a header with a plane.
    ///
    /// Fails with [`BmpError::InvalidArgument`] if the plane's dimensions
    /// differ from the header's.
    pub fn from_parts(header: Header, plane: PixelPlane) -> Result<Self, BmpError> {
        if header.width != plane.width() || header.height != plane.height() {
            return Err(BmpError::InvalidArgument(format!(
                "header is {}x{} but plane is {}x{}",
                header.width,
                header.height,
                plane.width(),
                plane.height()
            )));
        }
        Ok(Self { header, plane })
    }

    pub fn into_parts(self) -> (Header, PixelPlane) {
        (self.header, self.plane)
    }

    /// Decode from an in-memory BMP file.
    pub fn from_bmp_bytes(data: &[u8]) -> Result<Self, BmpError> {
        crate::decode(Cursor::new(data))
    }

    /// Encode to an in-memory BMP file.
    pub fn to_bmp_bytes(&self) -> Result<Vec<u8>, BmpError> {
        let mut out = Cursor::new(Vec::new());
        crate::encode(&mut out, self)?;
        Ok(out.into_inner())
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn plane(&self) -> &PixelPlane {
        &self.plane
    }

    pub(crate) fn plane_mut(&mut self) -> &mut PixelPlane {
        &mut self.plane
    }

    pub fn width(&self) -> u32 {
        self.header.width
    }

    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// All pixels, row-major, in stored row order.
    pub fn pixels(&self) -> &[Pixel] {
        self.plane.pixels()
    }

    /// Pixel at `(x, y)` in the unpadded plane.
    pub fn pixel(&self, x: usize, y: usize) -> Result<&Pixel, BmpError> {
        self.plane.pixel_at(x, y, false)
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, Pixel> {
        imgref::ImgRef::new(
            self.pixels(),
            self.width() as usize,
            self.height() as usize,
        )
    }

    /// Copy the pixels into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<Pixel> {
        imgref::ImgVec::new(
            self.pixels().to_vec(),
            self.width() as usize,
            self.height() as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_must_agree() {
        let header = Header::new(2, 2).unwrap();
        let plane = PixelPlane::new(2, 3).unwrap();
        assert!(matches!(
            Image::from_parts(header, plane),
            Err(BmpError::InvalidArgument(_))
        ));
    }

    #[test]
    fn from_pixels_checks_count() {
        let px = [Pixel { b: 0, g: 0, r: 0 }; 3];
        assert!(Image::from_pixels(2, 2, &px).is_err());
        assert!(Image::from_pixels(3, 1, &px).is_ok());
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_view_shares_pixels() {
        let px: Vec<Pixel> = (0..6u8).map(|v| Pixel { b: v, g: v, r: v }).collect();
        let img = Image::from_pixels(3, 2, &px).unwrap();
        let view = img.as_imgref();
        assert_eq!(view.width(), 3);
        assert_eq!(view.height(), 2);
        assert_eq!(view.pixels().collect::<Vec<_>>(), px);
    }
}
