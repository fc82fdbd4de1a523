//! Keymap help bar UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let keymap_text = if app.error_message.is_some() {
        "any key:close"
    } else if app.file_browser.visible {
        "jk/↑↓:nav | Enter/l:select | h:parent | Esc:cancel"
    } else if app.choice.is_active() {
        "jk/↑↓:choose | Enter:ok | Esc:cancel"
    } else if app.prompt.is_active() {
        "Enter:ok | Esc:cancel | Type to edit"
    } else {
        "q:quit | hjkl:move | Enter:edit | Space:select | s:save | o:load | R:resize | f:random | r:recalc | y:copy | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
