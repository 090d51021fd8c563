//! Line plot rendering.

use super::formatters::axis_labels;
use super::ThemeColors;
use crate::plot::{LineData, PlotOptions};
use crate::util::PlotLayoutConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Axis, Chart, Dataset, Paragraph},
    Frame,
};

/// Draw a line chart of `data` into `area`.
pub(super) fn draw_line(
    f: &mut Frame<'_>,
    area: Rect,
    data: &LineData,
    options: &PlotOptions,
    layout: &PlotLayoutConfig,
    colors: &ThemeColors,
) {
    let Some((x_bounds, y_bounds)) = data.bounds(layout.y_axis_padding_factor) else {
        let para = Paragraph::new("No finite data to display")
            .style(Style::default().fg(colors.fg0))
            .alignment(Alignment::Center);
        f.render_widget(para, area);
        return;
    };

    let points = data.points();
    let dataset = Dataset::default()
        .marker(options.marker)
        .graph_type(options.graph_type)
        .style(Style::default().fg(options.color))
        .data(&points);

    let x_axis = Axis::default()
        .style(Style::default().fg(colors.green))
        .bounds(x_bounds)
        .labels(axis_labels(x_bounds[0], x_bounds[1], layout.axis_labels));

    let y_axis = Axis::default()
        .style(Style::default().fg(colors.green))
        .bounds(y_bounds)
        .labels(axis_labels(y_bounds[0], y_bounds[1], layout.axis_labels));

    let chart = Chart::new(vec![dataset])
        .style(Style::default().fg(colors.fg0))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
