//! colorize provides color models for the RGB, HSL, HSV and CMYK color
//! spaces, lossless conversions between them, linear mixing of two colors
//! in the same space, and multi-stop gradient sampling.

#![deny(missing_docs)]

mod cmyk;
mod color;
mod convert;
mod error;
mod gradient;
mod hsl;
mod hsv;
mod interpolate;
mod rgb;
#[cfg(test)]
mod test;

pub use cmyk::Cmyk;
pub use color::{Color, Component, Components, Model, Space};
pub use error::Error;
pub use gradient::Colorizer;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use rgb::{Hex, Rgb, Rgba};
