//! Linear mixing of colors.

use num_traits::Float;

use crate::color::{Color, Component, Model};
use crate::error::Error;
use crate::rgb::{Hex, Rgba};

/// Linearly interpolate from `other` to `this`: a percent of 1 yields
/// `this` and a percent of 0 yields `other`.
fn lerp<T: Float>(percent: T, this: T, other: T) -> T {
    percent * (this - other) + other
}

/// Mix two unit-range components, clamping the result back into [0, 1].
pub(crate) fn mix_unit(percent: Component, this: Component, other: Component) -> Component {
    lerp(percent, this, other).clamp(0.0, 1.0)
}

/// Mix two RGB channels, flooring and clamping the result onto [0, 255].
pub(crate) fn mix_channel(percent: Component, this: u8, other: u8) -> u8 {
    lerp(percent, Component::from(this), Component::from(other))
        .floor()
        .clamp(0.0, 255.0) as u8
}

/// Mix two hue angles, clamping to [0, 359] and flooring. Hues do not wrap
/// around the color wheel: mixing 350 and 10 degrees runs the long way
/// through 180.
pub(crate) fn mix_hue(percent: Component, this: Component, other: Component) -> Component {
    lerp(percent, this, other).clamp(0.0, 359.0).floor()
}

impl Color {
    /// Mix this color with another color of the same space, returning a new
    /// color in `self`'s space. The RGB family (RGB, RGBA and hex) is
    /// inter-mixable; an RGBA partner without an alpha counterpart counts
    /// as fully opaque. Any other pairing of spaces fails with
    /// [`Error::MixedSpaces`].
    pub fn mix(&self, percent: Component, other: &Self) -> Result<Self, Error> {
        let mismatch = Error::MixedSpaces {
            this: self.space(),
            other: other.space(),
        };

        match self {
            Self::Rgb(this) => {
                let other = other.as_rgb().ok_or(mismatch)?;
                Ok(Self::Rgb(this.mix(percent, &other)))
            }
            Self::Rgba(this) => {
                let other = Rgba {
                    rgb: other.as_rgb().ok_or(mismatch)?,
                    alpha: other.alpha().unwrap_or(1.0),
                };
                Ok(Self::Rgba(this.mix(percent, &other)))
            }
            Self::Hex(this) => {
                let other = Hex::from(other.as_rgb().ok_or(mismatch)?);
                Ok(Self::Hex(this.mix(percent, &other)))
            }
            Self::Hsl(this) => match other {
                Self::Hsl(other) => Ok(Self::Hsl(this.mix(percent, other))),
                _ => Err(mismatch),
            },
            Self::Hsv(this) => match other {
                Self::Hsv(other) => Ok(Self::Hsv(this.mix(percent, other))),
                _ => Err(mismatch),
            },
            Self::Cmyk(this) => match other {
                Self::Cmyk(other) => Ok(Self::Cmyk(this.mix(percent, other))),
                _ => Err(mismatch),
            },
        }
    }
}
