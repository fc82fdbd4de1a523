//! Per-column behaviour table.
//!
//! Every column of the grid has a fixed role: how it is edited, how it is
//! displayed, and which derived column (if any) an edit recomputes. Columns
//! past the configured ones behave as plain free-input columns.

/// Values offered when editing a choice column.
pub const CHOICES: [&str; 5] = ["1", "2", "3", "4", "5"];

/// How a column accepts user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Any text.
    Free,
    /// One of a fixed list of values.
    Choice(&'static [&'static str]),
}

/// How a column's cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRule {
    /// Default table style.
    Plain,
    /// Background colored by the sign of the value.
    SignColored,
}

/// Recalculation fired after a cell in the column is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Edits do not cascade.
    None,
    /// Write `sin(value)` into `target` on the same row.
    Sine {
        /// Column receiving the result.
        target: usize,
    },
    /// Write the running sum of this column into `target` for every row.
    RunningSum {
        /// Column receiving the result.
        target: usize,
    },
}

/// Complete description of a column's behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRole {
    /// Input constraint.
    pub input: InputKind,
    /// Display rule.
    pub display: DisplayRule,
    /// Recompute trigger.
    pub trigger: Trigger,
    /// Derived columns are skipped by random fill.
    pub derived: bool,
}

impl ColumnRole {
    const PLAIN: Self = Self {
        input: InputKind::Free,
        display: DisplayRule::Plain,
        trigger: Trigger::None,
        derived: false,
    };
}

const ROLES: [ColumnRole; 5] = [
    ColumnRole {
        input: InputKind::Choice(&CHOICES),
        trigger: Trigger::RunningSum { target: 3 },
        ..ColumnRole::PLAIN
    },
    ColumnRole {
        trigger: Trigger::Sine { target: 2 },
        ..ColumnRole::PLAIN
    },
    ColumnRole {
        display: DisplayRule::SignColored,
        derived: true,
        ..ColumnRole::PLAIN
    },
    ColumnRole::PLAIN,
    ColumnRole::PLAIN,
];

/// Role of column `col`.
pub fn role(col: usize) -> ColumnRole {
    ROLES.get(col).copied().unwrap_or(ColumnRole::PLAIN)
}

/// Header label for column `col`.
pub fn header(col: usize) -> String {
    format!("Column {}", col + 1)
}

/// Sign class of a numeric cell, used by [`DisplayRule::SignColored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTone {
    /// Value above zero.
    Positive,
    /// Value below zero.
    Negative,
    /// Zero (either sign) or NaN.
    Neutral,
}

impl CellTone {
    /// Classify a value by sign.
    pub fn of(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_roles() {
        assert_eq!(role(0).input, InputKind::Choice(&CHOICES));
        assert_eq!(role(0).trigger, Trigger::RunningSum { target: 3 });
        assert_eq!(role(1).trigger, Trigger::Sine { target: 2 });
        assert!(role(2).derived);
        assert_eq!(role(2).display, DisplayRule::SignColored);
        assert_eq!(role(4), role(9));
    }

    #[test]
    fn tone_by_sign() {
        assert_eq!(CellTone::of(0.5), CellTone::Positive);
        assert_eq!(CellTone::of(-2.0), CellTone::Negative);
        assert_eq!(CellTone::of(0.0), CellTone::Neutral);
        assert_eq!(CellTone::of(-0.0), CellTone::Neutral);
    }
}
