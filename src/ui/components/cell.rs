//! Cell widgets for table rows.
//!
//! Each loaded row is turned into a row element: one cell widget per
//! declared column, built from the record's value for that column's field
//! key. The widget kind follows the column declaration:
//! - label cells show static text
//! - dropdown cells show a candidate list with the first candidate
//!   pre-selected, locked against any edit beyond picking a candidate
//! - read-only field cells display a value but forbid typing
//!
//! A value whose shape does not match its column's kind degrades silently:
//! the cell renders what it can and no other cell shifts.

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::record::{CellKind, CellValue};
use crate::ui::theme::Theme;

/// Pad or truncate text to a fixed cell width.
pub(crate) fn pad_cell(text: &str, width: u16) -> String {
    let width = width as usize;
    format!("{:<width$.width$}", text)
}

/// A single-select dropdown locked to its candidate list.
///
/// Picking a candidate is the one interaction the cell allows; the
/// candidate list itself cannot be edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownCell {
    /// Available candidates.
    candidates: Vec<String>,
    /// Index of the currently picked candidate.
    picked: usize,
}

impl DropdownCell {
    /// Create a dropdown cell with the first candidate pre-selected.
    pub fn new(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            picked: 0,
        }
    }

    /// The currently picked candidate.
    pub fn current(&self) -> Option<&str> {
        self.candidates.get(self.picked).map(String::as_str)
    }

    /// Pick the next candidate, wrapping past the end.
    pub fn cycle(&mut self) {
        if !self.candidates.is_empty() {
            self.picked = (self.picked + 1) % self.candidates.len();
        }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the candidate list is empty.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// One rendered cell of a row element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellWidget {
    /// Static text.
    Label(String),
    /// Single-select dropdown.
    Dropdown(DropdownCell),
    /// Read-only text field.
    ReadOnly(String),
}

impl CellWidget {
    /// Build the cell widget for a column kind and a record value.
    ///
    /// Mismatched shapes degrade: a plain text value in a dropdown column
    /// has no candidates and renders as a label, while a candidate list in
    /// a label or read-only column renders its first candidate.
    pub fn build(kind: CellKind, value: &CellValue) -> CellWidget {
        match (kind, value) {
            (CellKind::Label, value) => CellWidget::Label(value.display_text().to_string()),
            (CellKind::Dropdown, CellValue::Choices(candidates)) => {
                CellWidget::Dropdown(DropdownCell::new(candidates.clone()))
            }
            (CellKind::Dropdown, CellValue::Text(text)) => CellWidget::Label(text.clone()),
            (CellKind::ReadOnly, value) => CellWidget::ReadOnly(value.display_text().to_string()),
        }
    }

    /// The text the cell currently displays.
    pub fn display(&self) -> &str {
        match self {
            CellWidget::Label(text) => text,
            CellWidget::Dropdown(cell) => cell.current().unwrap_or(""),
            CellWidget::ReadOnly(text) => text,
        }
    }

    /// Whether this cell is a dropdown.
    pub fn is_dropdown(&self) -> bool {
        matches!(self, CellWidget::Dropdown(_))
    }

    /// Pick the dropdown's next candidate; no-op for other kinds.
    pub fn cycle(&mut self) {
        if let CellWidget::Dropdown(cell) = self {
            cell.cycle();
        }
    }

    /// Render the cell into a fixed-width span.
    ///
    /// Only label cells take the selection shading; dropdown and read-only
    /// cells keep their own styling when their row is selected.
    pub fn render_span(&self, width: u16, selected: bool, theme: &Theme) -> Span<'static> {
        match self {
            CellWidget::Label(text) => {
                let mut style = Style::default().fg(theme.fg);
                if selected {
                    style = style.bg(theme.selection);
                }
                Span::styled(pad_cell(text, width), style)
            }
            CellWidget::Dropdown(cell) => {
                let text = match cell.current() {
                    Some(current) => format!("{} ▼", current),
                    None => String::new(),
                };
                Span::styled(
                    pad_cell(&text, width),
                    Style::default().fg(theme.input_fg),
                )
            }
            CellWidget::ReadOnly(text) => Span::styled(
                pad_cell(text, width),
                Style::default()
                    .fg(theme.input_fg)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_cell_pads_short_text() {
        assert_eq!(pad_cell("ab", 5), "ab   ");
    }

    #[test]
    fn test_pad_cell_truncates_long_text() {
        assert_eq!(pad_cell("abcdefgh", 5), "abcde");
    }

    #[test]
    fn test_build_label_cell() {
        let cell = CellWidget::build(CellKind::Label, &CellValue::text("hello"));
        assert_eq!(cell, CellWidget::Label("hello".to_string()));
        assert_eq!(cell.display(), "hello");
    }

    #[test]
    fn test_build_dropdown_cell_preselects_first() {
        let cell = CellWidget::build(CellKind::Dropdown, &CellValue::choices(["one", "two"]));
        assert!(cell.is_dropdown());
        assert_eq!(cell.display(), "one");
    }

    #[test]
    fn test_build_readonly_cell() {
        let cell = CellWidget::build(CellKind::ReadOnly, &CellValue::text("fixed"));
        assert_eq!(cell, CellWidget::ReadOnly("fixed".to_string()));
    }

    #[test]
    fn test_text_value_in_dropdown_column_degrades_to_label() {
        let cell = CellWidget::build(CellKind::Dropdown, &CellValue::text("plain"));
        assert!(!cell.is_dropdown());
        assert_eq!(cell.display(), "plain");
    }

    #[test]
    fn test_choices_value_in_label_column_shows_first_candidate() {
        let cell = CellWidget::build(CellKind::Label, &CellValue::choices(["a", "b"]));
        assert_eq!(cell.display(), "a");
    }

    #[test]
    fn test_dropdown_cycle_wraps() {
        let mut cell = DropdownCell::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(cell.current(), Some("a"));

        cell.cycle();
        assert_eq!(cell.current(), Some("b"));

        cell.cycle();
        cell.cycle();
        assert_eq!(cell.current(), Some("a"));
    }

    #[test]
    fn test_empty_dropdown_cycle_is_noop() {
        let mut cell = DropdownCell::new(Vec::new());
        cell.cycle();
        assert_eq!(cell.current(), None);
        assert!(cell.is_empty());
    }

    #[test]
    fn test_cycle_on_label_is_noop() {
        let mut cell = CellWidget::Label("text".to_string());
        cell.cycle();
        assert_eq!(cell.display(), "text");
    }
}
