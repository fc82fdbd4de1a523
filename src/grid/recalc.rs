//! Derived-column arithmetic.

/// Value written to the sine target column.
pub fn sine(value: f64) -> f64 {
    value.sin()
}

/// Parse cell text as a float.
///
/// Surrounding whitespace is ignored. Empty text is absent and yields `None`.
pub fn parse_cell(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Running sums over a column.
///
/// Entry `i` is the sum of rows `0..=i`. Once a row is absent or unparsable,
/// it and every later row have no defined sum.
pub fn running_sums<'a, I>(cells: I) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut acc = Some(0.0);
    cells
        .into_iter()
        .map(|text| {
            acc = match (acc, parse_cell(text)) {
                (Some(sum), Some(v)) => Some(sum + v),
                _ => None,
            };
            acc
        })
        .collect()
}

/// Render a computed float back into cell text.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
