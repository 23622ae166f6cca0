//! Quantized colour scales for the heatmap and the circular diagram.

use serde::{Deserialize, Serialize};

use crate::Error;

/// An ordered, non-empty list of CSS colours, from the lowest to the highest bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ColorPalette(Vec<String>);

impl ColorPalette {
    /// Create a palette from `colors`.
    ///
    /// Returns [Error::InvalidConfig] if `colors` is empty.
    pub fn new<S: Into<String>>(colors: impl IntoIterator<Item = S>) -> Result<Self, Error> {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();

        if colors.is_empty() {
            return Err(Error::InvalidConfig(
                "a colour palette needs at least one colour".to_owned(),
            ));
        }

        Ok(Self(colors))
    }

    /// The five greens used for the calendar heatmap and the circular diagram.
    pub fn heatmap() -> Self {
        Self(
            ["#d9ef8b", "#a6d96a", "#66bd63", "#1a9850", "#006837"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        )
    }

    /// The number of colours, i.e. the number of buckets of a scale built from this palette.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, palettes cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The colours in bucket order.
    pub fn colors(&self) -> &[String] {
        &self.0
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::heatmap()
    }
}

impl TryFrom<Vec<String>> for ColorPalette {
    type Error = Error;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColorPalette> for Vec<String> {
    fn from(value: ColorPalette) -> Self {
        value.0
    }
}

/// Maps values in `[0, max]` to one of the palette colours.
///
/// The domain is cut into as many equal-width buckets as there are colours.
/// Values below zero or at and above `max` are clamped to the first and last
/// bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    max: f64,
    palette: ColorPalette,
}

impl ColorScale {
    /// Create a scale over the domain `[0, max]`.
    ///
    /// A `max` of zero is a degenerate domain: the scale maps every value to
    /// the first colour.
    pub fn new(max: u64, palette: ColorPalette) -> Self {
        if max == 0 {
            tracing::warn!("Colour scale domain is [0, 0], all values will use the first colour");
        }

        Self {
            max: max as f64,
            palette,
        }
    }

    /// The zero-based bucket that `value` falls into.
    pub fn bucket(&self, value: f64) -> usize {
        let bucket_count = self.palette.len();

        if self.max <= 0.0 || !value.is_finite() {
            return 0;
        }

        let bucket = (bucket_count as f64 * value / self.max).floor();

        bucket.clamp(0.0, (bucket_count - 1) as f64) as usize
    }

    /// The colour for `value`.
    pub fn color(&self, value: f64) -> &str {
        &self.palette.colors()[self.bucket(value)]
    }

    /// The upper end of the domain.
    pub fn max(&self) -> f64 {
        self.max
    }
}
