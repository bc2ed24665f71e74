//! Channel extraction by bitmask.

use std::fmt;
use std::str::FromStr;

use super::require_pixels;
use crate::error::BmpError;
use crate::image::Image;
use crate::pixel::Pixel;

/// Which color channels [`extract_channels`] keeps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Channels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl Channels {
    pub const ALL: Channels = Channels {
        red: true,
        green: true,
        blue: true,
    };

    /// True when no channel is kept.
    pub fn is_empty(&self) -> bool {
        !(self.red || self.green || self.blue)
    }

    /// Per-channel AND mask: 0xFF for kept channels, 0x00 for the rest.
    pub fn mask(&self) -> Pixel {
        let byte = |keep: bool| if keep { 0xFF } else { 0x00 };
        Pixel {
            b: byte(self.blue),
            g: byte(self.green),
            r: byte(self.red),
        }
    }
}

/// Parses 1 to 3 letters from `r`, `g`, `b`, e.g. `"rb"`. Repeats are allowed.
impl FromStr for Channels {
    type Err = BmpError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        if spec.is_empty() || spec.len() > 3 {
            return Err(BmpError::InvalidArgument(format!(
                "channel spec {spec:?} must be 1 to 3 letters of r, g, b"
            )));
        }
        let mut channels = Channels::default();
        for c in spec.chars() {
            match c {
                'r' => channels.red = true,
                'g' => channels.green = true,
                'b' => channels.blue = true,
                other => {
                    return Err(BmpError::InvalidArgument(format!(
                        "unknown channel {other:?} in {spec:?}"
                    )));
                }
            }
        }
        Ok(channels)
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (keep, letter) in [(self.red, 'r'), (self.green, 'g'), (self.blue, 'b')] {
            if keep {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Zero every channel not named in `spec` (see [`Channels`]).
pub fn extract(image: &Image, spec: &str) -> Result<Image, BmpError> {
    extract_channels(image, spec.parse()?)
}

/// Zero the channels `channels` does not keep. Dimensions and header are unchanged.
///
/// Fails with [`BmpError::InvalidArgument`] if `channels` keeps nothing.
pub fn extract_channels(image: &Image, channels: Channels) -> Result<Image, BmpError> {
    if channels.is_empty() {
        return Err(BmpError::InvalidArgument(
            "channel set must keep at least one of r, g, b".into(),
        ));
    }
    require_pixels(image, "extract channels from")?;
    log::debug!(
        "extract {channels} from {}x{}",
        image.width(),
        image.height()
    );
    let mut out = image.clone();
    if channels == Channels::ALL {
        return Ok(out);
    }
    let mask = channels.mask();
    for px in out.plane_mut().pixels_mut() {
        px.b &= mask.b;
        px.g &= mask.g;
        px.r &= mask.r;
    }
    Ok(out)
}
