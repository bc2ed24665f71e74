use crate::error::BmpError;
use crate::pixel::PixelPlane;

/// Caps on the pixel planes a decode or a transform may allocate.
///
/// All fields default to `None` (no limit). Checked against the output
/// dimensions before any pixel memory is reserved.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for one unpadded pixel plane.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check a `width` x `height` plane before allocating it.
    pub(crate) fn check_plane(&self, width: u32, height: u32) -> Result<(), BmpError> {
        let exceeded = |what: &str, value: u64, max: u64| {
            BmpError::LimitExceeded(format!("{what} {value} exceeds limit {max}"))
        };

        let (w, h) = (u64::from(width), u64::from(height));
        if let Some(max) = self.max_width.filter(|&max| w > max) {
            return Err(exceeded("width", w, max));
        }
        if let Some(max) = self.max_height.filter(|&max| h > max) {
            return Err(exceeded("height", h, max));
        }
        let pixels = w * h;
        if let Some(max) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(exceeded("pixel count", pixels, max));
        }
        if let Some(max) = self.max_memory_bytes {
            let bytes = PixelPlane::byte_len(width, height)? as u64;
            if bytes > max {
                return Err(exceeded("plane size in bytes", bytes, max));
            }
        }
        Ok(())
    }
}
