//! Cycleviz turns a CSV of daily bicycle hire counts into chart geometry.
//!
//! The records are grouped by year, month and week, and each selected year is
//! mapped to a calendar heatmap (with a bar chart of month totals) and a
//! circular diagram of week totals. The result is plain data: cell positions,
//! separator paths, angles, radii and colours, ready to hand to whatever draws
//! the charts.
//!
//! ```no_run
//! # async fn run() -> Result<(), cycleviz_rs::Error> {
//! use cycleviz_rs::{ChartConfig, YearView, spawn_load, wait_for_dataset};
//!
//! let dataset = wait_for_dataset(spawn_load("day.csv".into())).await?;
//! let view = YearView::select(&dataset, 2011, &ChartConfig::default())?;
//! println!("{}", view.to_json()?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod aggregation;
mod calendar;
mod charts;
mod color;
mod config;
mod csv;
mod dataset;
mod error;
mod grouping;
mod logging;
mod radial;
mod record;
mod scale;
mod view;

pub use aggregation::{max_amount, max_total, month_label};
pub use calendar::{
    CalendarGeometry, Cell, MonthBar, MonthLabel, MonthSeparator, WeekdayLabel,
    calendar_geometry, month_separator_path, week_column, weekday_row,
};
pub use charts::{monthly_totals_chart, weekly_totals_chart};
pub use color::{ColorPalette, ColorScale};
pub use config::{CalendarConfig, ChartConfig, RadialConfig};
pub use crate::csv::parse_csv;
pub use dataset::{Dataset, LoadState, load_dataset, spawn_load, wait_for_dataset};
pub use error::{Error, ErrorKind};
pub use grouping::{
    Group, MonthGroup, WeekGroup, YearGroup, group_by_month, group_by_week, group_by_year,
    week_number,
};
pub use logging::setup_logging;
pub use radial::{Band, RadialGeometry, is_label_flipped, radial_geometry};
pub use record::Record;
pub use scale::{BandScale, LinearScale};
pub use view::{Total, YearView};
