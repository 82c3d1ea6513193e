//! Errors raised when mixing colors or building gradients. Everything here
//! is raised synchronously at the point of violation and never caught or
//! retried internally.

use crate::color::Space;
use thiserror::Error;

/// The error type for fallible operations on colors.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Raised when two colors from incompatible spaces are mixed.
    #[error("cannot mix a {this} color with a {other} color")]
    MixedSpaces {
        /// The space of the color the mix started from.
        this: Space,
        /// The space of the mix partner.
        other: Space,
    },

    /// Raised when a gradient is built over an empty color list.
    #[error("a gradient needs at least one color")]
    EmptyGradient,
}
