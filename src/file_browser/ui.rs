//! Load dialog rendering.

use super::{Entry, FileBrowserState};
use crate::ui::{centered_rect, ThemeColors};
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Draw the load dialog as a centered popup.
pub fn draw_file_browser(f: &mut Frame<'_>, state: &mut FileBrowserState, colors: &ThemeColors) {
    if !state.visible {
        return;
    }

    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);

    let items: Vec<ListItem<'_>> = state
        .entries
        .iter()
        .map(|entry| {
            let fg = match entry {
                Entry::File(_) => colors.value,
                Entry::Parent(_) | Entry::Dir(_) => colors.label,
            };
            ListItem::new(entry.label()).style(Style::default().fg(fg))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" Load data: {} ", state.dir.display()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .highlight_style(
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(list, area, &mut state.list);
}
