//! A [`Color`] can hold a color specified in any of the supported color
//! spaces, alongside the [`Model`] trait that every space implements.

use crate::{Cmyk, Hex, Hsl, Hsv, Rgb, Rgba};
use std::fmt;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all fractional components are stored
/// as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all fractional components are stored
/// as.
pub type Component = f64;

/// Three components describing a color during conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The color spaces and forms supported by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Space {
    /// The RGB color space with red, green and blue channels in [0, 255].
    Rgb = 0,
    /// The RGB color space extended with an alpha channel in [0, 1].
    Rgba = 1,
    /// The RGB color space packed into a 24-bit `0xRRGGBB` value.
    Hex = 2,
    /// The HSL (hue, saturation, lightness) notation.
    Hsl = 3,
    /// The HSV (hue, saturation, value) notation.
    Hsv = 4,
    /// The CMYK (cyan, magenta, yellow, black) subtractive space.
    Cmyk = 5,
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
            Self::Hex => "hex",
            Self::Hsl => "HSL",
            Self::Hsv => "HSV",
            Self::Cmyk => "CMYK",
        })
    }
}

/// The capabilities every color model provides: mixing with another color
/// of the same model, projecting onto the RGB cube and rendering a
/// CSS-style display string.
pub trait Model: fmt::Display {
    /// Mix this color with another color of the same model. `percent` says
    /// how much of `self` ends up in the result: 1 yields `self`, 0 yields
    /// `other`. Out-of-range percents are accepted and the derived
    /// components are clamped back into the model's valid range.
    fn mix(&self, percent: Component, other: &Self) -> Self;

    /// Project this color onto the RGB cube.
    fn to_rgb(&self) -> Rgb;
}

/// A color specified in any one of the supported spaces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// A color specified with red, green and blue channels.
    Rgb(Rgb),
    /// An RGB color with an alpha channel.
    Rgba(Rgba),
    /// An RGB color specified as a packed 24-bit value.
    Hex(Hex),
    /// A color specified with the HSL notation.
    Hsl(Hsl),
    /// A color specified with the HSV notation.
    Hsv(Hsv),
    /// A color specified in the CMYK space.
    Cmyk(Cmyk),
}

impl Color {
    /// Return the space this color is specified in.
    pub fn space(&self) -> Space {
        match self {
            Self::Rgb(_) => Space::Rgb,
            Self::Rgba(_) => Space::Rgba,
            Self::Hex(_) => Space::Hex,
            Self::Hsl(_) => Space::Hsl,
            Self::Hsv(_) => Space::Hsv,
            Self::Cmyk(_) => Space::Cmyk,
        }
    }

    /// Project this color onto the RGB cube.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb(c) => c.to_rgb(),
            Self::Rgba(c) => c.to_rgb(),
            Self::Hex(c) => c.to_rgb(),
            Self::Hsl(c) => c.to_rgb(),
            Self::Hsv(c) => c.to_rgb(),
            Self::Cmyk(c) => c.to_rgb(),
        }
    }

    /// Return the alpha channel of this color, if its space carries one.
    pub fn alpha(&self) -> Option<Component> {
        match self {
            Self::Rgba(c) => Some(c.alpha),
            _ => None,
        }
    }

    /// Convert this color to the given space. RGB is the hub: every
    /// conversion between two non-RGB spaces pivots through it.
    pub fn to_space(&self, space: Space) -> Self {
        if self.space() == space {
            return *self;
        }

        let rgb = self.to_rgb();
        match space {
            Space::Rgb => Self::Rgb(rgb),
            Space::Rgba => Self::Rgba(Rgba {
                rgb,
                alpha: self.alpha().unwrap_or(1.0),
            }),
            Space::Hex => Self::Hex(Hex::from(rgb)),
            Space::Hsl => Self::Hsl(rgb.to_hsl()),
            Space::Hsv => Self::Hsv(rgb.to_hsv()),
            Space::Cmyk => Self::Cmyk(rgb.to_cmyk()),
        }
    }

    /// Extract the RGB channels of colors in the RGB family. Used by mixing
    /// to accept any of RGB, RGBA and hex as a partner.
    pub(crate) fn as_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb(c) => Some(*c),
            Self::Rgba(c) => Some(c.rgb),
            Self::Hex(c) => Some(c.rgb),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(c) => c.fmt(f),
            Self::Rgba(c) => c.fmt(f),
            Self::Hex(c) => c.fmt(f),
            Self::Hsl(c) => c.fmt(f),
            Self::Hsv(c) => c.fmt(f),
            Self::Cmyk(c) => c.fmt(f),
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Rgba> for Color {
    fn from(value: Rgba) -> Self {
        Self::Rgba(value)
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Self::Hex(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Self::Hsl(value)
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Self::Hsv(value)
    }
}

impl From<Cmyk> for Color {
    fn from(value: Cmyk) -> Self {
        Self::Cmyk(value)
    }
}
