//! Model a color in the CMYK (cyan, magenta, yellow, black) subtractive
//! space.

use crate::color::{Component, Model};
use crate::interpolate::mix_unit;
use crate::{convert, Rgb};
use std::fmt;

/// A color specified with cyan, magenta, yellow and black components, each
/// in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cmyk {
    /// The cyan component of the color.
    pub cyan: Component,
    /// The magenta component of the color.
    pub magenta: Component,
    /// The yellow component of the color.
    pub yellow: Component,
    /// The black component of the color.
    pub black: Component,
}

impl Cmyk {
    /// Create a new color with CMYK (cyan, magenta, yellow, black)
    /// components.
    pub fn new(cyan: Component, magenta: Component, yellow: Component, black: Component) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            black,
        }
    }
}

impl Model for Cmyk {
    fn mix(&self, percent: Component, other: &Self) -> Self {
        Self::new(
            mix_unit(percent, self.cyan, other.cyan),
            mix_unit(percent, self.magenta, other.magenta),
            mix_unit(percent, self.yellow, other.yellow),
            mix_unit(percent, self.black, other.black),
        )
    }

    fn to_rgb(&self) -> Rgb {
        convert::cmyk_to_rgb(self)
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_rgb().fmt(f)
    }
}
