//! Geometry for the circular diagram of weekly totals.
//!
//! Each week group gets an equal slice of the circle, clockwise from twelve
//! o'clock, and a bar that grows outwards from the inner radius in proportion
//! to the week's total.

use std::f64::consts::{PI, TAU};

use serde::Serialize;

use crate::{
    Error,
    aggregation::max_total,
    color::{ColorPalette, ColorScale},
    config::RadialConfig,
    grouping::WeekGroup,
    scale::{BandScale, LinearScale},
};

/// Everything needed to draw one year of the circular diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialGeometry {
    /// The radius all bands start from.
    pub inner_radius: f64,
    /// The largest week total, which reaches the configured outer radius.
    pub max_total: u64,
    /// One band per week group, in group order.
    pub bands: Vec<Band>,
}

/// One angular slice of the diagram.
///
/// Angles are in radians, clockwise from twelve o'clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    /// The week number.
    pub week: u8,
    /// The sum of the week's amounts.
    pub total: u64,
    /// Where the slice starts.
    pub start_angle: f64,
    /// Where the slice ends, `start_angle` plus the band width.
    pub end_angle: f64,
    /// The gap the renderer leaves between this band and its neighbours.
    pub pad_angle: f64,
    /// Where the bar ends.
    pub outer_radius: f64,
    /// The bar colour.
    pub color: String,
    /// The label text.
    pub label: String,
    /// Whether the label text must be turned 180 degrees to stay upright,
    /// true on the left half of the circle.
    pub label_flipped: bool,
    /// The rotation of the label anchor, in degrees clockwise from three o'clock.
    pub label_rotation: f64,
    /// The distance of the label anchor from the centre.
    pub label_radius: f64,
}

impl Band {
    /// The angle halfway between the start and the end of the band.
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// The angle the drawn bar spans once the pad is removed.
    pub fn padded_span(&self) -> f64 {
        (self.end_angle - self.start_angle - self.pad_angle).max(0.0)
    }
}

/// Build the circular diagram for the week groups of one year.
///
/// The radial and colour scales run from zero to the largest week total.
/// Returns [Error::EmptyDataset] if there are no weeks.
pub fn radial_geometry(
    weeks: &[WeekGroup],
    palette: &ColorPalette,
    config: &RadialConfig,
) -> Result<RadialGeometry, Error> {
    let max = max_total(weeks)?;

    let angle_scale = BandScale::new(weeks.len(), (0.0, TAU));
    let bandwidth = angle_scale.bandwidth();
    let radius_scale = LinearScale::new(
        (0.0, max as f64),
        (config.inner_radius, config.outer_radius),
    );
    let color_scale = ColorScale::new(max, palette.clone());

    let bands = weeks
        .iter()
        .enumerate()
        .map(|(index, week)| {
            let total = week.total();
            let start_angle = angle_scale.position(index);
            let mid_angle = start_angle + bandwidth / 2.0;
            let outer_radius = radius_scale.scale(total as f64);

            Band {
                week: week.key,
                total,
                start_angle,
                end_angle: start_angle + bandwidth,
                pad_angle: config.pad_angle,
                outer_radius,
                color: color_scale.color(total as f64).to_owned(),
                label: format!("Week {}", week.key),
                label_flipped: is_label_flipped(mid_angle),
                label_rotation: mid_angle.to_degrees() - 90.0,
                label_radius: outer_radius + config.label_offset,
            }
        })
        .collect();

    tracing::debug!(
        "Built {} radial bands with a maximum weekly total of {max}",
        weeks.len()
    );

    Ok(RadialGeometry {
        inner_radius: config.inner_radius,
        max_total: max,
        bands,
    })
}

/// Whether a label at `mid_angle` would be upside down without an extra
/// half turn.
pub fn is_label_flipped(mid_angle: f64) -> bool {
    (mid_angle + PI) % TAU < PI
}
