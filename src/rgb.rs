//! Model a color with red, green and blue channels, and the two RGB
//! specializations: hex-packed colors and RGB with an alpha channel.

use crate::color::{Component, Components, Model};
use crate::interpolate::{mix_channel, mix_unit};
use std::fmt;

/// A color specified with red, green and blue channels, each in [0, 255].
/// This is the hub model: every other space converts to and from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) channels.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Normalize the channels into unit-range components.
    pub(crate) fn to_components(self) -> Components {
        Components(
            Component::from(self.red) / 255.0,
            Component::from(self.green) / 255.0,
            Component::from(self.blue) / 255.0,
        )
    }
}

impl Model for Rgb {
    fn mix(&self, percent: Component, other: &Self) -> Self {
        Self::new(
            mix_channel(percent, self.red, other.red),
            mix_channel(percent, self.green, other.green),
            mix_channel(percent, self.blue, other.blue),
        )
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// An RGB color specified as a packed 24-bit `0xRRGGBB` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hex {
    /// The RGB channels unpacked from the source value.
    pub rgb: Rgb,
}

impl Hex {
    /// Unpack a `0xRRGGBB` value into its RGB channels. Bits above the low
    /// 24 are ignored.
    pub fn new(value: u32) -> Self {
        Self {
            rgb: Rgb::new(
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
            ),
        }
    }

    /// Pack the channels back into a single 24-bit value.
    pub fn value(&self) -> u32 {
        u32::from(self.rgb.red) << 16 | u32::from(self.rgb.green) << 8 | u32::from(self.rgb.blue)
    }
}

impl From<Rgb> for Hex {
    fn from(rgb: Rgb) -> Self {
        Self { rgb }
    }
}

impl Model for Hex {
    fn mix(&self, percent: Component, other: &Self) -> Self {
        Self {
            rgb: self.rgb.mix(percent, &other.rgb),
        }
    }

    fn to_rgb(&self) -> Rgb {
        self.rgb
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            self.rgb.red, self.rgb.green, self.rgb.blue
        )
    }
}

/// An RGB color extended with an alpha channel in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// The opaque channels of the color.
    pub rgb: Rgb,
    /// The alpha channel of the color.
    pub alpha: Component,
}

impl Rgba {
    /// Create a new color with RGB channels and an alpha channel.
    pub fn new(red: u8, green: u8, blue: u8, alpha: Component) -> Self {
        Self {
            rgb: Rgb::new(red, green, blue),
            alpha,
        }
    }
}

impl Model for Rgba {
    fn mix(&self, percent: Component, other: &Self) -> Self {
        Self {
            rgb: self.rgb.mix(percent, &other.rgb),
            alpha: mix_unit(percent, self.alpha, other.alpha),
        }
    }

    fn to_rgb(&self) -> Rgb {
        self.rgb
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGBA({}, {}, {}, {})",
            self.rgb.red, self.rgb.green, self.rgb.blue, self.alpha
        )
    }
}
