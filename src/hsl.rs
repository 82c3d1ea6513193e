//! Model a color with the HSL (hue, saturation, lightness) notation.

use crate::color::{Component, Model};
use crate::interpolate::{mix_hue, mix_unit};
use crate::{convert, Rgb};
use std::fmt;

/// A color specified with hue, saturation and lightness. Hue is in degrees
/// in [0, 360), saturation and lightness are in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue component of the color.
    pub hue: Component,
    /// The saturation component of the color.
    pub saturation: Component,
    /// The lightness component of the color.
    pub lightness: Component,
}

impl Hsl {
    /// Create a new color with HSL (hue, saturation, lightness) components.
    pub fn new(hue: Component, saturation: Component, lightness: Component) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl Model for Hsl {
    fn mix(&self, percent: Component, other: &Self) -> Self {
        Self::new(
            mix_hue(percent, self.hue, other.hue),
            mix_unit(percent, self.saturation, other.saturation),
            mix_unit(percent, self.lightness, other.lightness),
        )
    }

    fn to_rgb(&self) -> Rgb {
        convert::hsl_to_rgb(self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HSL({}, {}%, {}%)",
            self.hue,
            (self.saturation * 100.0).round(),
            (self.lightness * 100.0).round()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_identity() {
        let a = Hsl::new(300.0, 1.0, 0.5);
        let b = Hsl::new(60.0, 0.25, 0.75);
        assert_eq!(a.mix(1.0, &b), a);
        assert_eq!(a.mix(0.0, &b), b);
    }

    #[test]
    fn mix_floors_the_hue() {
        let a = Hsl::new(0.0, 0.0, 0.0);
        let b = Hsl::new(45.0, 1.0, 1.0);
        let mixed = a.mix(0.5, &b);
        assert_eq!(mixed.hue, 22.0);
        assert_eq!(mixed.saturation, 0.5);
        assert_eq!(mixed.lightness, 0.5);
    }

    #[test]
    fn mix_clamps_out_of_range_percents() {
        let a = Hsl::new(300.0, 1.0, 1.0);
        let b = Hsl::new(100.0, 0.5, 0.5);
        let mixed = a.mix(2.0, &b);
        assert_eq!(mixed.hue, 359.0);
        assert_eq!(mixed.saturation, 1.0);
        let mixed = a.mix(-1.0, &b);
        assert_eq!(mixed.hue, 0.0);
        assert_eq!(mixed.saturation, 0.0);
    }

    #[test]
    fn mix_takes_the_long_way_around_the_wheel() {
        // Hue interpolation is literal, there is no shortest-path
        // wraparound at the 0/360 boundary.
        let a = Hsl::new(350.0, 1.0, 0.5);
        let b = Hsl::new(10.0, 1.0, 0.5);
        assert_eq!(a.mix(0.5, &b).hue, 180.0);
    }

    #[test]
    fn display_rounds_to_whole_percents() {
        assert_eq!(Hsl::new(0.0, 1.0, 0.5).to_string(), "HSL(0, 100%, 50%)");
        assert_eq!(
            Hsl::new(210.0, 0.333, 0.666).to_string(),
            "HSL(210, 33%, 67%)"
        );
    }
}
