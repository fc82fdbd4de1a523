//! Shared formatting utilities for UI components.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format an axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Cut text to at most `width` display columns, marking the cut with `~`.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('~');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(2.5), "2.5");
        assert_eq!(format_axis_label(150.0), "150");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn fit_width_truncates() {
        assert_eq!(fit_width("0.8414709848078965", 8), "0.84147~");
        assert_eq!(fit_width("6", 8), "6");
        assert_eq!(fit_width("abc", 0), "");
    }
}
