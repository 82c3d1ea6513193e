//! Conversions between the color spaces. RGB is the hub: every other space
//! projects onto RGB, and the reverse conversions exist only on [`Rgb`].
//! There are no direct conversions between two non-RGB spaces.

use crate::color::{Component, Components};
use crate::{Cmyk, Hsl, Hsv, Rgb};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.to_components());
        Hsl::new(hue, saturation, lightness)
    }

    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let Components(hue, saturation, value) = util::rgb_to_hsv(&self.to_components());
        Hsv::new(hue, saturation, value)
    }

    /// Convert this color to the CMYK space.
    pub fn to_cmyk(&self) -> Cmyk {
        let (Components(cyan, magenta, yellow), black) = util::rgb_to_cmyk(&self.to_components());
        Cmyk::new(cyan, magenta, yellow, black)
    }
}

/// Convert a color in the HSL notation to RGB.
pub(crate) fn hsl_to_rgb(from: &Hsl) -> Rgb {
    let chroma = (1.0 - (2.0 * from.lightness - 1.0).abs()) * from.saturation;
    let m = from.lightness - chroma / 2.0;
    scale_primes(util::hue_sextant(from.hue, chroma), m)
}

/// Convert a color in the HSV notation to RGB.
pub(crate) fn hsv_to_rgb(from: &Hsv) -> Rgb {
    let chroma = from.value * from.saturation;
    let m = from.value - chroma;
    scale_primes(util::hue_sextant(from.hue, chroma), m)
}

/// Convert a color in the CMYK space to RGB.
pub(crate) fn cmyk_to_rgb(from: &Cmyk) -> Rgb {
    let white = 1.0 - from.black;
    let channel = |component: Component| {
        (255.0 * (1.0 - component) * white)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgb::new(
        channel(from.cyan),
        channel(from.magenta),
        channel(from.yellow),
    )
}

/// Offset the selected primes by the match value and scale them onto the
/// RGB cube, flooring each channel.
fn scale_primes(primes: Components, m: Component) -> Rgb {
    let Components(red, green, blue) = primes.map(|v| ((v + m) * 255.0).floor().clamp(0.0, 255.0));
    Rgb::new(red as u8, green as u8, blue as u8)
}

mod util {
    use crate::color::{Component, Components};

    /// Calculate the hue in degrees from unit RGB components and return it
    /// along with the min and max component values. The hue of an
    /// achromatic color is 0.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else {
            let sector = if max == red {
                (green - blue) / delta
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };
            (60.0 * sector).rem_euclid(360.0)
        };

        (hue, min, max)
    }

    /// Convert unit RGB components to HSL components.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (max + min) / 2.0;
        let divisor = 1.0 - (2.0 * lightness - 1.0).abs();
        let saturation = if divisor == 0.0 {
            0.0
        } else {
            (max - min) / divisor
        };

        Components(hue, saturation, lightness)
    }

    /// Convert unit RGB components to HSV components.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        Components(hue, saturation, max)
    }

    /// Convert unit RGB components to CMYK components, returned as the
    /// cyan/magenta/yellow triple and the black component.
    pub fn rgb_to_cmyk(from: &Components) -> (Components, Component) {
        let Components(red, green, blue) = *from;

        let black = 1.0 - red.max(green).max(blue);
        // Pure black would divide by zero; its other components are 0.
        let component = |channel: Component| {
            if black == 1.0 {
                0.0
            } else {
                (1.0 - channel - black) / (1.0 - black)
            }
        };

        (
            Components(component(red), component(green), component(blue)),
            black,
        )
    }

    /// Select the (r', g', b') primes for the 60 degree sextant the hue
    /// falls in. The six ranges are mutually exclusive and cover [0, 360).
    pub fn hue_sextant(hue: Component, chroma: Component) -> Components {
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

        match hue {
            h if h < 60.0 => Components(chroma, x, 0.0),
            h if h < 120.0 => Components(x, chroma, 0.0),
            h if h < 180.0 => Components(0.0, chroma, x),
            h if h < 240.0 => Components(0.0, x, chroma),
            h if h < 300.0 => Components(x, 0.0, chroma),
            _ => Components(chroma, 0.0, x),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_component_eq;
    use crate::color::{Component, Model};
    use crate::{Cmyk, Hsl, Hsv, Rgb};

    /// A spread of channel values, including both extremes and values on
    /// either side of the midpoint.
    const CHANNELS: &[u8] = &[0, 1, 17, 51, 64, 127, 128, 200, 254, 255];

    fn channel_diff(a: u8, b: u8) -> i32 {
        (i32::from(a) - i32::from(b)).abs()
    }

    #[test]
    fn rgb_to_hsl_known_values() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component, Component, Component)] = &[
            (255,   0,   0,   0.0, 1.0, 0.5),
            (  0, 255,   0, 120.0, 1.0, 0.5),
            (  0,   0, 255, 240.0, 1.0, 0.5),
            (255, 255,   0,  60.0, 1.0, 0.5),
            (  0, 255, 255, 180.0, 1.0, 0.5),
            (255,   0, 255, 300.0, 1.0, 0.5),
            (  0,   0,   0,   0.0, 0.0, 0.0),
            (255, 255, 255,   0.0, 0.0, 1.0),
        ];

        for &(red, green, blue, hue, saturation, lightness) in TESTS {
            let hsl = Rgb::new(red, green, blue).to_hsl();
            assert_component_eq!(hsl.hue, hue);
            assert_component_eq!(hsl.saturation, saturation);
            assert_component_eq!(hsl.lightness, lightness);
        }
    }

    #[test]
    fn rgb_to_hsv_known_values() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, Component, Component, Component)] = &[
            (255,   0,   0,   0.0, 1.0, 1.0),
            (  0, 255,   0, 120.0, 1.0, 1.0),
            (  0,   0, 255, 240.0, 1.0, 1.0),
            (  0,   0,   0,   0.0, 0.0, 0.0),
            (255, 255, 255,   0.0, 0.0, 1.0),
        ];

        for &(red, green, blue, hue, saturation, value) in TESTS {
            let hsv = Rgb::new(red, green, blue).to_hsv();
            assert_component_eq!(hsv.hue, hue);
            assert_component_eq!(hsv.saturation, saturation);
            assert_component_eq!(hsv.value, value);
        }
    }

    #[test]
    fn rgb_to_cmyk_known_values() {
        let cmyk = Rgb::new(0, 0, 0).to_cmyk();
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 1.0));

        let cmyk = Rgb::new(255, 255, 255).to_cmyk();
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 0.0));

        let cmyk = Rgb::new(255, 0, 0).to_cmyk();
        assert_component_eq!(cmyk.cyan, 0.0);
        assert_component_eq!(cmyk.magenta, 1.0);
        assert_component_eq!(cmyk.yellow, 1.0);
        assert_component_eq!(cmyk.black, 0.0);
    }

    #[test]
    fn hue_sextants_select_the_right_primes() {
        #[rustfmt::skip]
        const TESTS: &[(Component, u8, u8, u8)] = &[
            ( 30.0, 255, 127,   0),
            ( 90.0, 127, 255,   0),
            (150.0,   0, 255, 127),
            (210.0,   0, 127, 255),
            (270.0, 127,   0, 255),
            (330.0, 255,   0, 127),
        ];

        for &(hue, red, green, blue) in TESTS {
            assert_eq!(
                Hsl::new(hue, 1.0, 0.5).to_rgb(),
                Rgb::new(red, green, blue),
                "hue {hue}"
            );
            assert_eq!(
                Hsv::new(hue, 1.0, 1.0).to_rgb(),
                Rgb::new(red, green, blue),
                "hue {hue}"
            );
        }
    }

    #[test]
    fn hsl_round_trip_is_within_one() {
        for &red in CHANNELS {
            for &green in CHANNELS {
                for &blue in CHANNELS {
                    let rgb = Rgb::new(red, green, blue);
                    let back = rgb.to_hsl().to_rgb();
                    assert!(
                        channel_diff(back.red, red) <= 1
                            && channel_diff(back.green, green) <= 1
                            && channel_diff(back.blue, blue) <= 1,
                        "{rgb} came back as {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn hsv_round_trip_is_within_one() {
        for &red in CHANNELS {
            for &green in CHANNELS {
                for &blue in CHANNELS {
                    let rgb = Rgb::new(red, green, blue);
                    let back = rgb.to_hsv().to_rgb();
                    assert!(
                        channel_diff(back.red, red) <= 1
                            && channel_diff(back.green, green) <= 1
                            && channel_diff(back.blue, blue) <= 1,
                        "{rgb} came back as {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn cmyk_round_trip_is_within_one() {
        for &red in CHANNELS {
            for &green in CHANNELS {
                for &blue in CHANNELS {
                    let rgb = Rgb::new(red, green, blue);
                    let back = rgb.to_cmyk().to_rgb();
                    assert!(
                        channel_diff(back.red, red) <= 1
                            && channel_diff(back.green, green) <= 1
                            && channel_diff(back.blue, blue) <= 1,
                        "{rgb} came back as {back}"
                    );
                }
            }
        }
    }
}
