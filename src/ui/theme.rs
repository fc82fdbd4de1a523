//! Color themes for the UI.

use crate::app::Theme;
use crate::column::CellTone;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Selected cell background color.
    pub selection_bg: Color,
    /// Plot line color.
    pub series: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Warning color.
    pub warning: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                cursor_fg: Color::Rgb(40, 40, 40),
                cursor_bg: Color::Rgb(251, 184, 108),
                selection_bg: Color::Rgb(69, 133, 136),
                series: Color::Rgb(131, 165, 152),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                warning: Color::Rgb(250, 189, 47),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                cursor_fg: Color::Rgb(251, 245, 234),
                cursor_bg: Color::Rgb(175, 58, 3),
                selection_bg: Color::Rgb(131, 165, 152),
                series: Color::Rgb(7, 102, 120),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                warning: Color::Rgb(181, 118, 20),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }
}

/// Background for a sign-colored cell. Fixed across themes.
pub fn tone_bg(tone: CellTone) -> Color {
    match tone {
        CellTone::Positive => Color::Rgb(0, 255, 0),
        CellTone::Negative => Color::Rgb(255, 0, 0),
        CellTone::Neutral => Color::Rgb(255, 255, 255),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_colors_are_fixed() {
        assert_eq!(tone_bg(CellTone::of(0.5)), Color::Rgb(0, 255, 0));
        assert_eq!(tone_bg(CellTone::of(-0.5)), Color::Rgb(255, 0, 0));
        assert_eq!(tone_bg(CellTone::of(0.0)), Color::Rgb(255, 255, 255));
    }
}
