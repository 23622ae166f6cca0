//! ECharts options for the month and week totals of a [YearView].
//!
//! These are an alternative to the raw geometry for renderers that draw with
//! ECharts: serialize a chart with `to_string()` and pass it to
//! `chart.setOption`.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisPointer, AxisPointerType, AxisType, ItemStyle, Tooltip, Trigger},
    series::bar,
};

use crate::{color::ColorPalette, view::YearView};

/// A bar chart of the month totals of the selected year, drawn in the
/// darkest colour of `palette`.
pub fn monthly_totals_chart(view: &YearView, palette: &ColorPalette) -> Chart {
    let labels: Vec<String> = view.months.iter().map(|month| month.label.clone()).collect();
    let values: Vec<f64> = view.months.iter().map(|month| month.total as f64).collect();

    totals_chart(
        "Monthly bike hires",
        &view.year.to_string(),
        labels,
        values,
        palette,
    )
}

/// A bar chart of the week totals of the selected year, in the same order as
/// the bands of the circular diagram.
pub fn weekly_totals_chart(view: &YearView, palette: &ColorPalette) -> Chart {
    let labels: Vec<String> = view.weeks.iter().map(|week| week.label.clone()).collect();
    let values: Vec<f64> = view.weeks.iter().map(|week| week.total as f64).collect();

    totals_chart(
        "Weekly bike hires",
        &view.year.to_string(),
        labels,
        values,
        palette,
    )
}

fn totals_chart(
    title: &str,
    subtitle: &str,
    labels: Vec<String>,
    values: Vec<f64>,
    palette: &ColorPalette,
) -> Chart {
    let bar_color = palette.colors().last().cloned().unwrap_or_default();

    Chart::new()
        .title(Title::new().text(title).subtext(subtitle))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            bar::Bar::new()
                .name(title)
                .item_style(ItemStyle::new().color(bar_color.as_str()))
                .data(values),
        )
}
