//! The charts for a selected year.

use serde::Serialize;

use crate::{
    Error,
    aggregation::month_label,
    calendar::{CalendarGeometry, calendar_geometry},
    color::ColorScale,
    config::ChartConfig,
    dataset::Dataset,
    grouping::{group_by_month, group_by_week},
    radial::{RadialGeometry, radial_geometry},
};

/// The sum of the amounts in one month or week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Total {
    /// The month index (January = 0) or the week number.
    pub key: u8,
    /// A short name for the month or week.
    pub label: String,
    /// The sum of the amounts.
    pub total: u64,
}

/// Everything the renderer needs to draw the charts for one year.
///
/// A view is recomputed from the dataset whenever a different year is
/// selected and is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearView {
    /// The selected year.
    pub year: i32,
    /// The years that can be selected, in the order they appear in the data.
    pub years: Vec<i32>,
    /// Month totals, in first-seen order.
    pub months: Vec<Total>,
    /// Week totals, in first-seen order.
    pub weeks: Vec<Total>,
    /// The calendar heatmap and month bar chart.
    pub calendar: CalendarGeometry,
    /// The circular diagram.
    pub radial: RadialGeometry,
}

impl YearView {
    /// Compute the charts for `year`.
    ///
    /// The heatmap colours are scaled to the largest day of the whole
    /// dataset, the month bars and the circular diagram to the largest month
    /// and week of `year`.
    ///
    /// Returns [Error::UnknownYear] if the dataset has no records for `year`.
    pub fn select(dataset: &Dataset, year: i32, config: &ChartConfig) -> Result<Self, Error> {
        let year_group = dataset.year(year).ok_or(Error::UnknownYear(year))?;

        let months = group_by_month(year_group);
        let weeks = group_by_week(year_group);
        tracing::debug!(
            "Selected {year}: {} days, {} months, {} weeks",
            year_group.records.len(),
            months.len(),
            weeks.len()
        );

        let color_scale = ColorScale::new(dataset.max_amount(), config.palette.clone());
        let calendar = calendar_geometry(year_group, &months, &color_scale, &config.calendar);
        let radial = radial_geometry(&weeks, &config.palette, &config.radial)?;

        Ok(Self {
            year,
            years: dataset.years(),
            months: months
                .iter()
                .map(|month| Total {
                    key: month.key,
                    label: month_label(month.key).to_owned(),
                    total: month.total(),
                })
                .collect(),
            weeks: weeks
                .iter()
                .map(|week| Total {
                    key: week.key,
                    label: format!("Week {}", week.key),
                    total: week.total(),
                })
                .collect(),
            calendar,
            radial,
        })
    }

    /// The view as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
