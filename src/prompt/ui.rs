//! Dialog rendering.

use super::{ChoicePicker, PromptState};
use crate::ui::{centered_rect, ThemeColors};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Draw the text prompt, if open.
pub fn draw_prompt(f: &mut Frame<'_>, state: &PromptState, colors: &ThemeColors) {
    let Some(kind) = state.kind() else {
        return;
    };

    let area = fixed_height(centered_rect(60, 100, f.area()), 3);
    f.render_widget(Clear, area);

    let line = Line::from(vec![
        Span::styled(state.buffer(), Style::default().fg(colors.text)),
        Span::styled("_", Style::default().fg(colors.cursor_bg)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(format!(" {} (Enter: ok, Esc: cancel) ", kind.title()))
            .title_style(Style::default().fg(colors.heading))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );
    f.render_widget(paragraph, area);
}

/// Draw the choice picker, if open.
pub fn draw_choice(f: &mut Frame<'_>, picker: &ChoicePicker, colors: &ThemeColors) {
    let Some((row, col)) = picker.target() else {
        return;
    };

    let height = picker.options().len() as u16 + 2;
    let area = fixed_height(centered_rect(30, 100, f.area()), height);
    f.render_widget(Clear, area);

    let items: Vec<ListItem<'_>> = picker
        .options()
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let style = if idx == picker.cursor() {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            ListItem::new(Line::from(*option)).style(style)
        })
        .collect();

    let title = format!(" {} / row {} ", crate::column::header(col), row + 1);
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(colors.heading))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );
    f.render_widget(list, area);
}

fn fixed_height(r: Rect, height: u16) -> Rect {
    let height = height.min(r.height);
    Rect {
        y: r.y + (r.height - height) / 2,
        height,
        ..r
    }
}
