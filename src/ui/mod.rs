//! User interface rendering.
//!
//! Layout, top to bottom: table, plot, status bar, key map bar. Dialogs and
//! the error popup are drawn over it.

pub mod formatters;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::file_browser::ui::draw_file_browser;
use crate::plot::ui::draw_plot;
use crate::prompt::ui::{draw_choice, draw_prompt};
use crate::table::ui::draw_table;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub use theme::{tone_bg, ThemeColors};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_table(f, chunks[0], &app.grid, &mut app.table, &colors);
    draw_plot(f, chunks[1], &app.plot, &colors);
    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app, &colors);

    draw_file_browser(f, &mut app.file_browser, &colors);
    draw_prompt(f, &app.prompt, &colors);
    draw_choice(f, &app.choice, &colors);

    if let Some(ref error) = app.error_message {
        draw_error(f, error, &colors);
    }
}

fn draw_error(f: &mut Frame<'_>, error: &str, colors: &ThemeColors) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Error",
            Style::default()
                .fg(colors.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(error, Style::default().fg(colors.text))),
        Line::from(""),
        Line::from("Press any key to close"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.error))
                .style(Style::default().bg(colors.bg)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

/// Rectangle centered in `r` taking the given percentages of its size.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
