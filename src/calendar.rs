//! Geometry for the calendar heatmap and the month bar chart above it.
//!
//! The grid has one column per Monday-to-Sunday week of the year and one row
//! per weekday, Monday at the top. Coordinates are relative to the top-left
//! corner of the grid; the renderer decides where the grid goes.

use serde::Serialize;
use time::{Date, Duration, Weekday};

use crate::{
    aggregation::{max_total, month_label},
    color::ColorScale,
    config::CalendarConfig,
    grouping::{MonthGroup, YearGroup},
    record::Record,
    scale::{DEFAULT_TICK_COUNT, LinearScale},
};

/// The number of rows in the grid.
const DAYS_PER_WEEK: u32 = 7;

/// The horizontal gap between a month's first Sunday column and its label or bar.
const LABEL_PADDING: f64 = 2.0;

/// Everything needed to draw one year of the calendar heatmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarGeometry {
    /// The year shown.
    pub year: i32,
    /// The side length of a cell.
    pub cell_size: f64,
    /// One cell per record.
    pub cells: Vec<Cell>,
    /// The lines between months, for every month but the first.
    pub month_separators: Vec<MonthSeparator>,
    /// The month names above the grid.
    pub month_labels: Vec<MonthLabel>,
    /// The weekday initials left of the grid.
    pub weekday_labels: Vec<WeekdayLabel>,
    /// The bars of the month totals chart above the grid.
    pub month_bars: Vec<MonthBar>,
}

/// The square for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// The day and its amount.
    #[serde(flatten)]
    pub record: Record,
    /// The Monday-aligned week of the year, see [week_column].
    pub column: u32,
    /// The weekday, Monday = 0.
    pub row: u32,
    /// `column * cell_size`
    pub x: f64,
    /// `row * cell_size`
    pub y: f64,
    /// The heatmap colour of the amount.
    pub color: String,
}

/// An SVG path tracing the boundary between a month and the one before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSeparator {
    /// The zero-based index of the month that starts at this boundary.
    pub month: u8,
    /// The path description, e.g. `M150,0V75H125V175`.
    pub path: String,
}

/// Where to write a month's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLabel {
    /// The zero-based month index.
    pub month: u8,
    /// The three-letter month name.
    pub text: &'static str,
    /// The column of the first Sunday on or after the first of the month.
    pub column: u32,
    /// The left edge of the text.
    pub x: f64,
}

/// The initial of a weekday, placed at the middle of its row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekdayLabel {
    /// The row, Monday = 0.
    pub row: u32,
    /// The weekday initial.
    pub text: &'static str,
    /// The vertical centre of the row.
    pub y: f64,
}

/// One bar of the month totals chart, measured upwards from its baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBar {
    /// The zero-based month index.
    pub month: u8,
    /// The sum of the month's amounts.
    pub total: u64,
    /// The left edge of the bar, aligned with the month label and offset by
    /// the weekday label space.
    pub x: f64,
    /// The bar width.
    pub width: f64,
    /// The bar height.
    pub height: f64,
}

/// Build the heatmap geometry for `year`.
///
/// `months` must be the month groups of `year` in first-seen order, and
/// `color_scale` is built over the whole dataset so colours are comparable
/// between years.
pub fn calendar_geometry(
    year: &YearGroup,
    months: &[MonthGroup],
    color_scale: &ColorScale,
    config: &CalendarConfig,
) -> CalendarGeometry {
    let cell_size = config.cell_size;

    let cells = year
        .records
        .iter()
        .map(|record| {
            let column = week_column(record.date);
            let row = weekday_row(record.date);

            Cell {
                record: *record,
                column,
                row,
                x: f64::from(column) * cell_size,
                y: f64::from(row) * cell_size,
                color: color_scale.color(record.amount as f64).to_owned(),
            }
        })
        .collect();

    let month_starts: Vec<(u8, Date)> = months
        .iter()
        .filter_map(|month| {
            month
                .records
                .first()
                .map(|record| (month.key, month_start(record.date)))
        })
        .collect();

    let month_separators = month_starts
        .iter()
        .skip(1)
        .map(|&(month, start)| MonthSeparator {
            month,
            path: month_separator_path(week_column(start), weekday_row(start), cell_size),
        })
        .collect();

    let month_labels = month_starts
        .iter()
        .map(|&(month, start)| {
            let column = label_column(start);

            MonthLabel {
                month,
                text: month_label(month),
                column,
                x: f64::from(column) * cell_size + LABEL_PADDING,
            }
        })
        .collect();

    CalendarGeometry {
        year: year.key,
        cell_size,
        cells,
        month_separators,
        month_labels,
        weekday_labels: weekday_labels(cell_size),
        month_bars: month_bars(months, config),
    }
}

/// The number of Monday week boundaries after January 1st up to and
/// including `date`.
///
/// Days before the year's first Monday are in column 0, so the first Monday
/// is in column 0 only when the year starts on a Monday.
pub fn week_column(date: Date) -> u32 {
    weeks_between(year_start(date), date, Weekday::Monday)
}

/// The row of `date`, Monday = 0 through Sunday = 6.
pub fn weekday_row(date: Date) -> u32 {
    u32::from(date.weekday().number_days_from_monday())
}

/// The path separating the month starting at `column`, `row` from the month before.
///
/// A month starting on a Monday gets a straight vertical line on the left of
/// its first column. Otherwise the line runs down the right edge of the first
/// week's column to the starting row, left across that column, then down to
/// the bottom of the grid. A `row` of 7 or more is treated as a month that
/// starts after its first week column, giving a straight line to the right of
/// it.
pub fn month_separator_path(column: u32, row: u32, cell_size: f64) -> String {
    let n = DAYS_PER_WEEK;
    let d = row.min(n);
    let w = f64::from(column);
    let bottom = f64::from(n) * cell_size;

    let start = if d == 0 {
        format!("M{},0", w * cell_size)
    } else if d == n {
        format!("M{},0", (w + 1.0) * cell_size)
    } else {
        format!(
            "M{},0V{}H{}",
            (w + 1.0) * cell_size,
            f64::from(d) * cell_size,
            w * cell_size
        )
    };

    format!("{start}V{bottom}")
}

/// The column a month's label and bar are placed in: the number of Sunday
/// boundaries from January 1st to the first Sunday on or after `month_start`.
fn label_column(month_start: Date) -> u32 {
    weeks_between(
        year_start(month_start),
        sunday_on_or_after(month_start),
        Weekday::Sunday,
    )
}

fn weekday_labels(cell_size: f64) -> Vec<WeekdayLabel> {
    const INITIALS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

    INITIALS
        .iter()
        .zip(0u32..)
        .map(|(&text, row)| WeekdayLabel {
            row,
            text,
            y: (f64::from(row) + 0.5) * cell_size,
        })
        .collect()
}

/// The bars of the month totals chart, scaled so the largest month fills
/// the chart after rounding its total up to a round tick value.
fn month_bars(months: &[MonthGroup], config: &CalendarConfig) -> Vec<MonthBar> {
    let max = max_total(months).unwrap_or_default();
    let height_scale = LinearScale::new((0.0, max as f64), (0.0, config.bar_chart_height))
        .nice(DEFAULT_TICK_COUNT);

    months
        .iter()
        .filter_map(|month| {
            let first = month.records.first()?;
            let total = month.total();

            Some(MonthBar {
                month: month.key,
                total,
                x: config.label_offset
                    + f64::from(label_column(month_start(first.date))) * config.cell_size
                    + LABEL_PADDING,
                width: config.bar_width,
                height: height_scale.scale(total as f64),
            })
        })
        .collect()
}

/// The number of `week_start` boundaries after `start` up to and including `end`.
fn weeks_between(start: Date, end: Date, week_start: Weekday) -> u32 {
    let start = floor_to_weekday(start, week_start);
    let end = floor_to_weekday(end, week_start);

    ((end - start).whole_days() / 7).max(0) as u32
}

/// The latest `weekday` on or before `date`.
fn floor_to_weekday(date: Date, weekday: Weekday) -> Date {
    let days_since = (7 + date.weekday().number_days_from_monday()
        - weekday.number_days_from_monday())
        % 7;

    date - Duration::days(i64::from(days_since))
}

fn sunday_on_or_after(date: Date) -> Date {
    let days_until = (7 - date.weekday().number_days_from_sunday()) % 7;

    date + Duration::days(i64::from(days_until))
}

fn year_start(date: Date) -> Date {
    date - Duration::days(i64::from(date.ordinal()) - 1)
}

fn month_start(date: Date) -> Date {
    date - Duration::days(i64::from(date.day()) - 1)
}

#[cfg(test)]
mod tests {
    use time::{Duration, macros::date};

    use crate::{
        calendar::{
            calendar_geometry, label_column, month_separator_path, week_column, weekday_row,
        },
        color::{ColorPalette, ColorScale},
        config::CalendarConfig,
        grouping::{group_by_month, group_by_year},
        record::Record,
    };

    #[test]
    fn first_monday_of_year_starting_on_monday_is_origin() {
        // 2018-01-01 is a Monday.
        let date = date!(2018 - 01 - 01);

        assert_eq!((week_column(date), weekday_row(date)), (0, 0));
    }

    #[test]
    fn days_before_first_monday_share_column_zero() {
        // 2011-01-01 is a Saturday, the first Monday is 2011-01-03.
        assert_eq!(week_column(date!(2011 - 01 - 01)), 0);
        assert_eq!(weekday_row(date!(2011 - 01 - 01)), 5);
        assert_eq!(week_column(date!(2011 - 01 - 02)), 0);
        assert_eq!(weekday_row(date!(2011 - 01 - 02)), 6);
        assert_eq!(week_column(date!(2011 - 01 - 03)), 1);
        assert_eq!(weekday_row(date!(2011 - 01 - 03)), 0);
        assert_eq!(week_column(date!(2011 - 12 - 31)), 52);
    }

    #[test]
    fn separator_for_month_starting_on_monday_is_straight() {
        // 2018-10-01 is a Monday.
        let start = date!(2018 - 10 - 01);

        let path = month_separator_path(week_column(start), weekday_row(start), 25.0);

        assert_eq!(path, "M975,0V175");
    }

    #[test]
    fn separator_for_month_starting_mid_week_steps() {
        // 2011-02-01 is a Tuesday in column 5.
        let start = date!(2011 - 02 - 01);

        let path = month_separator_path(week_column(start), weekday_row(start), 25.0);

        assert_eq!(path, "M150,0V25H125V175");
    }

    #[test]
    fn separator_for_month_starting_on_sunday_steps_at_last_row() {
        // 2011-05-01 is a Sunday in column 17.
        let start = date!(2011 - 05 - 01);

        let path = month_separator_path(week_column(start), weekday_row(start), 25.0);

        assert_eq!(path, "M450,0V150H425V175");
    }

    #[test]
    fn separator_past_last_row_is_straight_after_column() {
        assert_eq!(month_separator_path(3, 7, 10.0), "M40,0V70");
        assert_eq!(month_separator_path(3, 9, 10.0), "M40,0V70");
    }

    #[test]
    fn separator_keeps_fractional_coordinates() {
        assert_eq!(month_separator_path(1, 3, 12.5), "M25,0V37.5H12.5V87.5");
    }

    #[test]
    fn label_column_counts_sundays_up_to_first_sunday() {
        // 2011-01-01 is a Saturday, its first Sunday 2011-01-02 is one boundary away.
        assert_eq!(label_column(date!(2011 - 01 - 01)), 1);
        // 2011-02-01 is a Tuesday, the next Sunday is 2011-02-06.
        assert_eq!(label_column(date!(2011 - 02 - 01)), 6);
        // 2017-01-01 is a Sunday, which is not after the start of the year.
        assert_eq!(label_column(date!(2017 - 01 - 01)), 0);
    }

    #[test]
    fn geometry_for_small_year() {
        let records = vec![
            Record::new(date!(2011 - 01 - 03), 100),
            Record::new(date!(2011 - 01 - 04), 1200),
            Record::new(date!(2011 - 02 - 01), 50),
        ];
        let year = &group_by_year(&records)[0];
        let months = group_by_month(year);
        let scale = ColorScale::new(1200, ColorPalette::heatmap());

        let geometry = calendar_geometry(year, &months, &scale, &CalendarConfig::default());

        assert_eq!(geometry.year, 2011);
        assert_eq!(geometry.cells.len(), 3);
        assert_eq!((geometry.cells[0].x, geometry.cells[0].y), (25.0, 0.0));
        assert_eq!((geometry.cells[1].x, geometry.cells[1].y), (25.0, 25.0));
        assert_eq!(geometry.cells[0].color, "#d9ef8b");
        assert_eq!(geometry.cells[1].color, "#006837");
        assert_eq!(geometry.cells[2].color, "#d9ef8b");

        assert_eq!(geometry.month_separators.len(), 1);
        assert_eq!(geometry.month_separators[0].month, 1);
        assert_eq!(geometry.month_separators[0].path, "M150,0V25H125V175");

        let labels: Vec<(&str, f64)> = geometry
            .month_labels
            .iter()
            .map(|label| (label.text, label.x))
            .collect();
        assert_eq!(labels, vec![("Jan", 27.0), ("Feb", 152.0)]);
    }

    #[test]
    fn month_bars_use_nice_scale() {
        let records = vec![
            Record::new(date!(2011 - 01 - 03), 100),
            Record::new(date!(2011 - 01 - 04), 1200),
            Record::new(date!(2011 - 02 - 01), 50),
        ];
        let year = &group_by_year(&records)[0];
        let months = group_by_month(year);
        let scale = ColorScale::new(1200, ColorPalette::heatmap());

        let geometry = calendar_geometry(year, &months, &scale, &CalendarConfig::default());
        let bars = &geometry.month_bars;

        // Jan total 1300 is already a multiple of the tick step of 100.
        assert_eq!(bars.len(), 2);
        assert_eq!((bars[0].total, bars[0].height), (1300, 100.0));
        assert!((bars[1].height - 50.0 / 13.0).abs() < 1e-9);
        assert_eq!(bars[0].x, 40.0 + 25.0 + 2.0);
        assert_eq!(bars[1].x, 40.0 + 150.0 + 2.0);
        assert_eq!(bars[0].width, 20.0);
    }

    #[test]
    fn full_year_has_eleven_separators_and_twelve_labels() {
        let start = date!(2011 - 01 - 01);
        let records: Vec<Record> = (0..365)
            .map(|offset| Record::new(start + Duration::days(offset), 10))
            .collect();
        let year = &group_by_year(&records)[0];
        let months = group_by_month(year);
        let scale = ColorScale::new(10, ColorPalette::heatmap());

        let geometry = calendar_geometry(year, &months, &scale, &CalendarConfig::default());

        assert_eq!(geometry.month_separators.len(), 11);
        assert_eq!(geometry.month_labels.len(), 12);
        assert_eq!(geometry.weekday_labels.len(), 7);
        assert_eq!(geometry.weekday_labels[6].text, "S");
        assert_eq!(geometry.weekday_labels[6].y, 162.5);
        assert!(geometry.cells.iter().all(|cell| cell.row < 7 && cell.column <= 52));
    }
}
