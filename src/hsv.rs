//! Model a color with the HSV (hue, saturation, value) notation.

use crate::color::{Component, Model};
use crate::interpolate::{mix_hue, mix_unit};
use crate::{convert, Rgb};
use std::fmt;

/// A color specified with hue, saturation and value. Hue is in degrees in
/// [0, 360), saturation and value are in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// The hue component of the color.
    pub hue: Component,
    /// The saturation component of the color.
    pub saturation: Component,
    /// The value component of the color.
    pub value: Component,
}

impl Hsv {
    /// Create a new color with HSV (hue, saturation, value) components.
    pub fn new(hue: Component, saturation: Component, value: Component) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl Model for Hsv {
    fn mix(&self, percent: Component, other: &Self) -> Self {
        Self::new(
            mix_hue(percent, self.hue, other.hue),
            mix_unit(percent, self.saturation, other.saturation),
            mix_unit(percent, self.value, other.value),
        )
    }

    fn to_rgb(&self) -> Rgb {
        convert::hsv_to_rgb(self)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_rgb().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_identity() {
        let a = Hsv::new(300.0, 1.0, 0.5);
        let b = Hsv::new(60.0, 0.25, 0.75);
        assert_eq!(a.mix(1.0, &b), a);
        assert_eq!(a.mix(0.0, &b), b);
    }

    #[test]
    fn mix_floors_and_clamps_the_hue() {
        let a = Hsv::new(0.0, 0.0, 0.0);
        let b = Hsv::new(45.0, 1.0, 1.0);
        assert_eq!(a.mix(0.5, &b).hue, 22.0);

        let a = Hsv::new(359.0, 0.0, 0.0);
        assert_eq!(a.mix(2.0, &b).hue, 359.0);
    }

    #[test]
    fn display_delegates_to_the_rgb_projection() {
        assert_eq!(Hsv::new(120.0, 1.0, 1.0).to_string(), "RGB(0, 255, 0)");
    }
}
