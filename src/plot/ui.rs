//! Plot rendering.

use super::PlotState;
use crate::ui::formatters::format_axis_label;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw the plot area.
pub fn draw_plot(f: &mut Frame<'_>, area: Rect, state: &PlotState, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let Some(series) = state.series() else {
        let para = Paragraph::new("Select two cells (Space) to plot their columns")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block.title(" Plot "));
        f.render_widget(para, area);
        return;
    };

    let title = format!(" {} vs {} ", series.y_label(), series.x_label());
    let block = block
        .title(title)
        .title_style(Style::default().fg(colors.heading));

    let Some((x_bounds, y_bounds)) = series.bounds() else {
        let para = Paragraph::new("No finite values to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };

    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let datasets = vec![Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(colors.series))
        .data(&points)];

    let x_axis = Axis::default()
        .title(series.x_label())
        .style(Style::default().fg(colors.text))
        .bounds(x_bounds)
        .labels(axis_labels(x_bounds));

    let y_axis = Axis::default()
        .title(series.y_label())
        .style(Style::default().fg(colors.text))
        .bounds(y_bounds)
        .labels(axis_labels(y_bounds));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn axis_labels([min, max]: [f64; 2]) -> Vec<String> {
    vec![
        format_axis_label(min),
        format_axis_label((min + max) / 2.0),
        format_axis_label(max),
    ]
}
