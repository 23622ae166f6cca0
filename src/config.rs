//! Chart dimensions and colours.
//!
//! The defaults reproduce the layout of the bicycle hire dashboard. Any field
//! can be overridden from a JSON file, missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, color::ColorPalette};

/// Settings for every chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChartConfig {
    /// The colours of the heatmap cells and the circular diagram bands.
    pub palette: ColorPalette,
    /// Settings for the calendar heatmap and its bar chart.
    pub calendar: CalendarConfig,
    /// Settings for the circular diagram.
    pub radial: RadialConfig,
}

/// Settings for the calendar heatmap and the bar chart above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// The side length of one day cell.
    pub cell_size: f64,
    /// The horizontal space reserved for the weekday labels, left of the grid.
    pub label_offset: f64,
    /// The width of a month bar.
    pub bar_width: f64,
    /// The height of the tallest possible month bar.
    pub bar_chart_height: f64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            cell_size: 25.0,
            label_offset: 40.0,
            bar_width: 20.0,
            bar_chart_height: 100.0,
        }
    }
}

/// Settings for the circular diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadialConfig {
    /// The radius every band starts from.
    pub inner_radius: f64,
    /// The radius of the band with the largest total.
    pub outer_radius: f64,
    /// The gap between neighbouring bands, in radians.
    pub pad_angle: f64,
    /// The distance between the end of a band and its label.
    pub label_offset: f64,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            inner_radius: 140.0,
            outer_radius: 300.0,
            pad_angle: 0.01,
            label_offset: 50.0,
        }
    }
}

impl ChartConfig {
    /// Parse a configuration from JSON text and check it.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        let config: ChartConfig =
            serde_json::from_str(text).map_err(|error| Error::InvalidConfig(error.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Read a configuration from the JSON file at `path`.
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let text = tokio::fs::read_to_string(path).await.map_err(|error| {
            Error::InvalidConfig(format!("could not read {}: {error}", path.display()))
        })?;

        tracing::debug!("Loaded chart configuration from {}", path.display());

        Self::from_json(&text)
    }

    /// Returns [Error::InvalidConfig] if a size is not positive, the radii
    /// are out of order, or the pad angle is negative.
    pub fn validate(&self) -> Result<(), Error> {
        let calendar = &self.calendar;
        let radial = &self.radial;

        if calendar.cell_size <= 0.0 {
            return Err(Error::InvalidConfig(
                "calendar.cell_size must be positive".to_owned(),
            ));
        }

        if calendar.bar_width < 0.0 || calendar.bar_chart_height < 0.0 {
            return Err(Error::InvalidConfig(
                "calendar bar sizes cannot be negative".to_owned(),
            ));
        }

        if radial.inner_radius < 0.0 || radial.outer_radius < radial.inner_radius {
            return Err(Error::InvalidConfig(format!(
                "radial radii must satisfy 0 <= inner_radius ({}) <= outer_radius ({})",
                radial.inner_radius, radial.outer_radius
            )));
        }

        if radial.pad_angle < 0.0 {
            return Err(Error::InvalidConfig(
                "radial.pad_angle cannot be negative".to_owned(),
            ));
        }

        Ok(())
    }
}
