//! Grid table rendering.

use super::TableState;
use crate::column::{self, CellTone, DisplayRule};
use crate::grid::{parse_cell, Grid};
use crate::ui::formatters::fit_width;
use crate::ui::{tone_bg, ThemeColors};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, Cell, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    },
    Frame,
};

const COL_WIDTH: usize = 12;
const ROW_HEADER_WIDTH: usize = 6;

/// Draw the grid.
pub fn draw_table(
    f: &mut Frame<'_>,
    area: Rect,
    grid: &Grid,
    state: &mut TableState,
    colors: &ThemeColors,
) {
    // Account for borders and the header row
    let visible_rows = (area.height as usize).saturating_sub(3);
    let visible_cols = ((area.width as usize).saturating_sub(ROW_HEADER_WIDTH + 2) / COL_WIDTH)
        .clamp(1, grid.cols().max(1));
    state.adjust_scroll(visible_rows, visible_cols);

    let start_row = state.scroll.row;
    let start_col = state.scroll.col;
    let end_row = (start_row + visible_rows).min(grid.rows());
    let end_col = (start_col + visible_cols).min(grid.cols());

    let mut header_cells = vec![Cell::from("")];
    for col in start_col..end_col {
        header_cells.push(
            Cell::from(column::header(col)).style(
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }

    let mut rows = Vec::with_capacity(end_row.saturating_sub(start_row));
    for row in start_row..end_row {
        let mut cells = vec![Cell::from(format!("{:>5}", row + 1))
            .style(Style::default().fg(colors.label))];
        for col in start_col..end_col {
            let text = grid.get(row, col).unwrap_or("");
            let style = cell_style(text, row, col, state, colors);
            cells.push(Cell::from(fit_width(text, COL_WIDTH - 1)).style(style));
        }
        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(ROW_HEADER_WIDTH as u16)];
    widths.extend((start_col..end_col).map(|_| Constraint::Length(COL_WIDTH as u16)));

    let title = format!(
        " Table {}x{} | {} selected ",
        grid.rows(),
        grid.cols(),
        state.selection().len()
    );

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(title)
                .title_style(Style::default().fg(colors.heading)),
        )
        .style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(table, area);

    if grid.rows() > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(grid.rows().saturating_sub(visible_rows)).position(start_row);
        f.render_stateful_widget(
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("^"))
                .end_symbol(Some("v")),
            area,
            &mut scrollbar_state,
        );
    }
}

fn cell_style(
    text: &str,
    row: usize,
    col: usize,
    state: &TableState,
    colors: &ThemeColors,
) -> Style {
    let mut style = Style::default().fg(colors.value);

    if column::role(col).display == DisplayRule::SignColored && !text.trim().is_empty() {
        style = match parse_cell(text) {
            Some(v) => Style::default()
                .fg(Color::Black)
                .bg(tone_bg(CellTone::of(v))),
            None => Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::CROSSED_OUT),
        };
    }

    if state.is_selected(row, col) {
        style = style.bg(colors.selection_bg).add_modifier(Modifier::UNDERLINED);
    }
    if state.cursor() == (row, col) {
        style = style
            .fg(colors.cursor_fg)
            .bg(colors.cursor_bg)
            .add_modifier(Modifier::BOLD);
    }
    style
}
