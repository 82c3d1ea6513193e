//! Sample colors along a multi-stop gradient.

use crate::color::{Component, Model};
use crate::error::Error;

/// One sub-interval of [0, 1] owned by an adjacent pair of colors, stored
/// as its (high, low) bounds.
type Window = (Component, Component);

/// Answers "what color lies at position `p` along the gradient defined by
/// an ordered list of same-space colors", where position 0 is the start of
/// the list and position 1 the end.
///
/// The unit interval is partitioned into `max(1, N - 1)` equal-width
/// contiguous closed windows, each owned by an adjacent pair of colors;
/// sampling locates the window containing the position and mixes the pair
/// at the position renormalized within the window.
#[derive(Clone, Debug)]
pub struct Colorizer<M: Model> {
    colors: Vec<M>,
    windows: Vec<Window>,
}

impl<M: Model> Colorizer<M> {
    /// Create a sampler over the given color stops. Fails with
    /// [`Error::EmptyGradient`] when no stops are given; a single stop
    /// yields a constant gradient.
    pub fn new(colors: Vec<M>) -> Result<Self, Error> {
        if colors.is_empty() {
            return Err(Error::EmptyGradient);
        }

        // Descending closed intervals covering [0, 1] end to end, each
        // window's low bound shared with the next window's high bound. The
        // bounds are quotients of whole numbers so the ends land exactly on
        // 0 and 1.
        let denominator = 1.max(colors.len() - 1);
        let windows = (0..denominator)
            .map(|i| {
                (
                    (denominator - i) as Component / denominator as Component,
                    (denominator - i - 1) as Component / denominator as Component,
                )
            })
            .collect();

        Ok(Self { colors, windows })
    }

    /// Sample the gradient at `percent` and render the mixed color as a
    /// string. Positions outside [0, 1] are clamped to the ends of the
    /// gradient.
    pub fn at(&self, percent: Component) -> String {
        if self.colors.len() == 1 {
            return self.colors[0].to_string();
        }

        let percent = percent.clamp(0.0, 1.0);
        let pane = self
            .windows
            .iter()
            .position(|&(high, low)| percent <= high && percent >= low)
            .unwrap_or(self.windows.len() - 1);

        let (high, low) = self.windows[pane];
        let local = (percent - low) / (high - low);

        // The windows descend from the high end of the interval, so the
        // first window is owned by the pair at the end of the list.
        let this = self.colors.len() - 1 - pane;
        self.colors[this]
            .mix(local, &self.colors[this - 1])
            .to_string()
    }
}
