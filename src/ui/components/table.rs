//! Scrollable record-table widget.
//!
//! The table renders an ordered collection of [`Record`]s as a grid of
//! cells below a fixed header row: a row-number column, then one cell per
//! declared column (label, dropdown, or read-only field), separated by
//! vertical rules. It supports single-row selection with background
//! shading, confirmed row deletion with reselection of the freed visual
//! slot, and mouse-wheel/scrollbar vertical scrolling.
//!
//! Row data is supplied after construction via [`Table::load_rows`] and
//! replaced wholesale on every load; there is no incremental diffing and
//! no virtualization. Rendered body rows map one-to-one onto row elements
//! by visual slot, so hit testing and selection are index lookups rather
//! than scans over the widget tree.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use tracing::{debug, info};

use crate::error::TableError;
use crate::record::{mock_columns, mock_field_keys, mock_records, Column, Record};
use crate::ui::components::cell::{pad_cell, CellWidget};
use crate::ui::components::confirm::Confirmation;
use crate::ui::theme::theme;

/// Text shown in the first column of the empty-state sentinel row.
pub const PLACEHOLDER_TEXT: &str = "Nothing is Found!";

/// Width of the fixed row-number column in character cells.
const NUMBER_COLUMN_WIDTH: u16 = 5;

/// Header text of the row-number column.
const NUMBER_COLUMN_TITLE: &str = "S/N";

/// Lines scrolled per mouse-wheel notch.
const WHEEL_SCROLL_LINES: usize = 2;

/// Body rows shown when no height was configured.
const DEFAULT_BODY_HEIGHT: u16 = 12;

/// Construction-time declarations for a [`Table`].
///
/// The default configuration is the built-in 4-column mock, so a table is
/// always independently demonstrable without any caller declarations.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Field keys, one per column, naming which record field each column
    /// displays.
    pub field_keys: Vec<String>,
    /// Column descriptors, positionally paired with `field_keys`.
    pub columns: Vec<Column>,
    /// Overall widget width in character cells; fits the declared columns
    /// if omitted.
    pub width: Option<u16>,
    /// Body height in rows; 12 if omitted.
    pub height: Option<u16>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            field_keys: mock_field_keys(),
            columns: mock_columns(),
            width: None,
            height: None,
        }
    }
}

/// One rendered row: the row-number label plus one built cell per column.
///
/// Row elements are rebuilt wholesale on every load. The sentinel element
/// substituted for an empty collection has no backing record.
#[derive(Debug)]
struct RowElement {
    /// Index of the backing record, `None` for the sentinel.
    record: Option<usize>,
    /// Row-number label text.
    number: String,
    /// Cell widgets, one per declared column.
    cells: Vec<CellWidget>,
}

/// A scrollable table of record rows with single-row selection.
#[derive(Debug)]
pub struct Table {
    /// Declared field keys, one per column.
    field_keys: Vec<String>,
    /// Declared column descriptors.
    columns: Vec<Column>,
    /// Configured widget width, if any.
    width: Option<u16>,
    /// Configured body height in rows, if any.
    height: Option<u16>,
    /// The row collection. Ordered, never reordered by the widget.
    records: Vec<Record>,
    /// Row elements built from the collection at load time.
    elements: Vec<RowElement>,
    /// Index of the logically selected record.
    selection: Option<usize>,
    /// Visual slot of the selection, retained for post-delete reselection.
    selected_visual: Option<usize>,
    /// Index of the topmost visible row element.
    scroll: usize,
    /// Body rows visible in the last render.
    visible_height: usize,
    /// Full widget area of the last render, for wheel hit testing.
    area: Rect,
    /// Body viewport of the last render, for click hit testing.
    body_area: Rect,
    /// Absolute (x, width) of each data column in the last render.
    cell_extents: Vec<(u16, u16)>,
}

impl Table {
    /// Create a table from the given declarations.
    ///
    /// Column descriptors and field keys must pair up positionally;
    /// mismatched lengths are rejected here rather than left to fail on
    /// a later lookup.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        if config.columns.len() != config.field_keys.len() {
            return Err(TableError::ColumnCount {
                columns: config.columns.len(),
                keys: config.field_keys.len(),
            });
        }

        Ok(Self {
            field_keys: config.field_keys,
            columns: config.columns,
            width: config.width,
            height: config.height,
            records: Vec::new(),
            elements: Vec::new(),
            selection: None,
            selected_visual: None,
            scroll: 0,
            visible_height: 0,
            area: Rect::default(),
            body_area: Rect::default(),
            cell_extents: Vec::new(),
        })
    }

    /// Replace the row collection, rebuilding every row element.
    ///
    /// `None` falls back to the built-in mock rows. An empty sequence
    /// renders the single "nothing found" sentinel row. Selection is
    /// cleared and the scroll offset clamped to the new row count.
    ///
    /// Every record is validated against the declared field keys before
    /// any state is replaced; on error the previously loaded rows remain
    /// fully intact.
    pub fn load_rows(&mut self, rows: Option<Vec<Record>>) -> Result<(), TableError> {
        let records = rows.unwrap_or_else(mock_records);
        Self::validate(&self.field_keys, &records)?;
        self.rebuild(records);
        Ok(())
    }

    /// Check that every record contains every declared field key.
    fn validate(field_keys: &[String], records: &[Record]) -> Result<(), TableError> {
        for (row, record) in records.iter().enumerate() {
            for key in field_keys {
                if !record.contains_key(key) {
                    return Err(TableError::missing_field(key, row));
                }
            }
        }
        Ok(())
    }

    /// Install a validated collection and rebuild all row elements.
    fn rebuild(&mut self, records: Vec<Record>) {
        self.elements = Self::build_elements(&self.field_keys, &self.columns, &records);
        self.records = records;
        self.selection = None;
        self.selected_visual = None;
        self.scroll = self.scroll.min(self.max_scroll());
        debug!(rows = self.records.len(), "row elements rebuilt");
    }

    /// Build one row element per record, or the sentinel for an empty
    /// collection.
    fn build_elements(
        field_keys: &[String],
        columns: &[Column],
        records: &[Record],
    ) -> Vec<RowElement> {
        if records.is_empty() {
            return vec![Self::sentinel_element(columns)];
        }

        records
            .iter()
            .enumerate()
            .map(|(index, record)| RowElement {
                record: Some(index),
                number: (index + 1).to_string(),
                cells: field_keys
                    .iter()
                    .zip(columns)
                    .map(|(key, column)| {
                        let value = record.get(key).cloned().unwrap_or_default();
                        CellWidget::build(column.kind, &value)
                    })
                    .collect(),
            })
            .collect()
    }

    /// The synthetic row shown when the collection is empty: placeholder
    /// text in the first column, every other column blank.
    fn sentinel_element(columns: &[Column]) -> RowElement {
        RowElement {
            record: None,
            number: "1".to_string(),
            cells: columns
                .iter()
                .enumerate()
                .map(|(index, _)| {
                    if index == 0 {
                        CellWidget::Label(PLACEHOLDER_TEXT.to_string())
                    } else {
                        CellWidget::Label(String::new())
                    }
                })
                .collect(),
        }
    }

    /// The current logical selection, if any.
    pub fn selected(&self) -> Option<&Record> {
        self.selection.and_then(|index| self.records.get(index))
    }

    /// The row collection.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of row elements currently rendered (the sentinel counts as
    /// one).
    pub fn rendered_rows(&self) -> usize {
        self.elements.len()
    }

    /// Index of the topmost visible row element.
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// The candidate currently picked by the dropdown cell at the given
    /// visual slot and field key.
    pub fn dropdown_choice(&self, visual: usize, key: &str) -> Option<&str> {
        let column = self.field_keys.iter().position(|k| k == key)?;
        match self.elements.get(visual)?.cells.get(column)? {
            CellWidget::Dropdown(cell) => cell.current(),
            _ => None,
        }
    }

    /// Select the row element at the given visual slot.
    ///
    /// Selecting the sentinel clears both logical and visual selection;
    /// a slot past the end does nothing.
    pub fn select_visual(&mut self, visual: usize) {
        if let Some(element) = self.elements.get(visual) {
            match element.record {
                Some(index) => {
                    self.selection = Some(index);
                    self.selected_visual = Some(visual);
                    debug!(row = index, "row selected");
                }
                None => self.select_none(),
            }
        }
    }

    /// Clear the selection.
    ///
    /// Unshading the previously selected row is implicit in the next
    /// render; a selection whose element is already gone needs no cleanup.
    pub fn select_none(&mut self) {
        self.selection = None;
        self.selected_visual = None;
    }

    /// Select the row element below the current selection, or the topmost
    /// visible one if nothing is selected, and keep it in view.
    pub fn move_down(&mut self) {
        let next = match self.selected_visual {
            Some(visual) => visual + 1,
            None => self.scroll,
        };
        if next < self.elements.len() {
            self.select_visual(next);
            self.scroll_into_view(next);
        }
    }

    /// Select the row element above the current selection, or the topmost
    /// visible one if nothing is selected, and keep it in view.
    pub fn move_up(&mut self) {
        match self.selected_visual {
            Some(visual) if visual > 0 => {
                self.select_visual(visual - 1);
                self.scroll_into_view(visual - 1);
            }
            Some(_) => {}
            None => {
                if !self.elements.is_empty() {
                    let top = self.scroll.min(self.elements.len() - 1);
                    self.select_visual(top);
                    self.scroll_into_view(top);
                }
            }
        }
    }

    /// Scroll by a signed number of rows, clamped to the content.
    pub fn scroll_by(&mut self, delta: isize) {
        if delta < 0 {
            self.scroll = self.scroll.saturating_sub(delta.unsigned_abs());
        } else {
            self.scroll = (self.scroll + delta as usize).min(self.max_scroll());
        }
    }

    /// Greatest valid scroll offset for the current content.
    fn max_scroll(&self) -> usize {
        self.elements.len().saturating_sub(self.visible_height.max(1))
    }

    /// Adjust the scroll offset so the given visual slot is on screen.
    fn scroll_into_view(&mut self, visual: usize) {
        if visual < self.scroll {
            self.scroll = visual;
        } else {
            let visible = self.visible_height.max(1);
            if visual >= self.scroll + visible {
                self.scroll = visual + 1 - visible;
            }
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the key moved the selection or scrolled the table.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                self.move_down();
                true
            }
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                self.move_up();
                true
            }
            (KeyCode::PageDown, _) => {
                self.scroll_by(self.visible_height.max(1) as isize);
                true
            }
            (KeyCode::PageUp, _) => {
                self.scroll_by(-(self.visible_height.max(1) as isize));
                true
            }
            (KeyCode::Home, _) => {
                if !self.elements.is_empty() {
                    self.select_visual(0);
                    self.scroll_into_view(0);
                }
                true
            }
            (KeyCode::End, _) => {
                if let Some(last) = self.elements.len().checked_sub(1) {
                    self.select_visual(last);
                    self.scroll_into_view(last);
                }
                true
            }
            _ => false,
        }
    }

    /// Handle mouse input.
    ///
    /// A primary-button release over a body row selects it; a release over
    /// a dropdown cell of the already-selected row picks that cell's next
    /// candidate instead. Wheel input anywhere over the widget scrolls the
    /// body. Returns true if the event was consumed.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> bool {
        let over_widget = contains(self.area, event.column, event.row);
        match event.kind {
            MouseEventKind::ScrollDown if over_widget => {
                self.scroll_by(WHEEL_SCROLL_LINES as isize);
                true
            }
            MouseEventKind::ScrollUp if over_widget => {
                self.scroll_by(-(WHEEL_SCROLL_LINES as isize));
                true
            }
            MouseEventKind::Up(MouseButton::Left)
                if contains(self.body_area, event.column, event.row) =>
            {
                let visual = self.scroll + (event.row - self.body_area.y) as usize;
                if visual >= self.elements.len() {
                    return false;
                }
                if self.selected_visual == Some(visual) {
                    if let Some(column) = self.column_at(event.column) {
                        let element = &mut self.elements[visual];
                        if element
                            .cells
                            .get(column)
                            .map_or(false, CellWidget::is_dropdown)
                        {
                            element.cells[column].cycle();
                            return true;
                        }
                    }
                }
                self.select_visual(visual);
                true
            }
            _ => false,
        }
    }

    /// Data column index at an absolute x coordinate of the last render.
    fn column_at(&self, x: u16) -> Option<usize> {
        self.cell_extents
            .iter()
            .position(|&(cx, width)| x >= cx && x < cx + width)
    }

    /// Delete the currently selected row after user confirmation.
    ///
    /// Returns the removed record, or `None` when nothing is selected or
    /// the user declines (no prompt is shown without a selection). After
    /// removal the remaining rows are reloaded wholesale and the freed
    /// visual slot is reselected, clamped to the new last row; deleting
    /// the last remaining row clears the selection and shows the sentinel.
    pub fn delete_selected(&mut self, confirm: &mut dyn Confirmation) -> Option<Record> {
        let index = self.selection?;
        if !confirm.confirm("Confirm Deletion?") {
            debug!(row = index, "deletion declined");
            return None;
        }

        let removed = self.records.remove(index);
        let prev_visual = self.selected_visual;

        let remaining = std::mem::take(&mut self.records);
        self.rebuild(remaining);

        if let Some(visual) = prev_visual {
            if let Some(last) = self.records.len().checked_sub(1) {
                self.select_visual(visual.min(last));
            }
        }

        info!(row = index, "row deleted");
        Some(removed)
    }

    /// Render the widget into the given area.
    ///
    /// The widget anchors to the area's top-left corner and clips itself
    /// to its configured width and height. Render state (viewport, cell
    /// extents) is retained for mouse hit testing.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let natural_width = 2
            + NUMBER_COLUMN_WIDTH
            + self
                .columns
                .iter()
                .map(|column| column.width + 1)
                .sum::<u16>();
        let width = self.width.unwrap_or(natural_width).min(area.width);
        let height = (self.height.unwrap_or(DEFAULT_BODY_HEIGHT) + 4).min(area.height);
        let widget_area = Rect::new(area.x, area.y, width, height);
        self.area = widget_area;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border));
        let inner = block.inner(widget_area);
        frame.render_widget(block, widget_area);

        if inner.height < 3 || inner.width == 0 {
            self.body_area = Rect::default();
            self.visible_height = 0;
            self.cell_extents.clear();
            return;
        }

        let header_area = Rect { height: 1, ..inner };
        let rule_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        let body = Rect {
            y: inner.y + 2,
            height: inner.height - 2,
            ..inner
        };
        self.body_area = body;
        self.visible_height = body.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        let mut extents = Vec::with_capacity(self.columns.len());
        let mut rule_offsets = Vec::with_capacity(self.columns.len());
        let mut x = NUMBER_COLUMN_WIDTH;
        for column in &self.columns {
            rule_offsets.push(x);
            extents.push((inner.x + x + 1, column.width));
            x += 1 + column.width;
        }
        self.cell_extents = extents;

        let header_style = Style::default().fg(t.accent).add_modifier(Modifier::BOLD);
        let rule_style = Style::default().fg(t.dim);

        let mut header = vec![Span::styled(
            pad_cell(NUMBER_COLUMN_TITLE, NUMBER_COLUMN_WIDTH),
            header_style,
        )];
        for column in &self.columns {
            header.push(Span::styled("│", rule_style));
            header.push(Span::styled(pad_cell(&column.text, column.width), header_style));
        }
        frame.render_widget(Line::from(header), header_area);

        let rule: String = (0..inner.width)
            .map(|offset| {
                if rule_offsets.contains(&offset) {
                    '┼'
                } else {
                    '─'
                }
            })
            .collect();
        frame.render_widget(Span::styled(rule, rule_style), rule_area);

        for ry in 0..body.height {
            let visual = self.scroll + ry as usize;
            let Some(element) = self.elements.get(visual) else {
                break;
            };
            let line_area = Rect {
                y: body.y + ry,
                height: 1,
                ..body
            };

            let selected = match element.record {
                Some(index) => self.selection == Some(index),
                None => false,
            };
            let number_style = if selected {
                Style::default().fg(t.fg).bg(t.selection)
            } else {
                Style::default().fg(t.fg)
            };
            let row_rule_style = if selected {
                rule_style.bg(t.selection)
            } else {
                rule_style
            };

            let mut spans = vec![Span::styled(
                pad_cell(&element.number, NUMBER_COLUMN_WIDTH),
                number_style,
            )];
            for (cell, column) in element.cells.iter().zip(&self.columns) {
                spans.push(Span::styled("│", row_rule_style));
                spans.push(cell.render_span(column.width, selected, t));
            }
            frame.render_widget(Line::from(spans), line_area);
        }

        if self.elements.len() > self.visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));

            let mut scrollbar_state = ScrollbarState::new(self.max_scroll()).position(self.scroll);

            let scrollbar_area = Rect::new(
                widget_area.x + widget_area.width - 1,
                body.y,
                1,
                body.height,
            );

            frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
        }
    }
}

/// Whether a point lies within a rect.
fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.right() && y >= area.y && y < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CellKind, CellValue, MOCK_ROW_COUNT};
    use ratatui::{backend::TestBackend, Terminal};

    /// Confirmation stub that counts prompts and returns a canned answer.
    struct CannedConfirm {
        answer: bool,
        prompts: usize,
    }

    impl CannedConfirm {
        fn new(answer: bool) -> Self {
            Self { answer, prompts: 0 }
        }
    }

    impl Confirmation for CannedConfirm {
        fn confirm(&mut self, _message: &str) -> bool {
            self.prompts += 1;
            self.answer
        }
    }

    fn name_record(name: &str) -> Record {
        [("name", CellValue::text(name))].into_iter().collect()
    }

    fn name_table() -> Table {
        Table::new(TableConfig {
            field_keys: vec!["name".to_string()],
            columns: vec![Column::new("Name", 20, CellKind::Label)],
            width: None,
            height: None,
        })
        .unwrap()
    }

    fn mixed_table() -> Table {
        Table::new(TableConfig {
            field_keys: vec!["name".to_string(), "status".to_string()],
            columns: vec![
                Column::new("Name", 20, CellKind::Label),
                Column::new("Status", 10, CellKind::Dropdown),
            ],
            width: None,
            height: None,
        })
        .unwrap()
    }

    fn draw(table: &mut Table) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| table.render(frame, frame.area()))
            .unwrap();
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn release(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn wheel(down: bool) -> MouseEvent {
        MouseEvent {
            kind: if down {
                MouseEventKind::ScrollDown
            } else {
                MouseEventKind::ScrollUp
            },
            column: 2,
            row: 2,
            modifiers: KeyModifiers::NONE,
        }
    }

    // With the default geometry the widget border is row 0, the header
    // row 1, the rule row 2, and body rows start at row 3 / column 1.
    const BODY_Y: u16 = 3;

    #[test]
    fn test_new_rejects_mismatched_columns() {
        let err = Table::new(TableConfig {
            field_keys: vec!["a".to_string(), "b".to_string()],
            columns: vec![Column::new("A", 5, CellKind::Label)],
            width: None,
            height: None,
        })
        .unwrap_err();

        assert_eq!(err, TableError::ColumnCount { columns: 1, keys: 2 });
    }

    #[test]
    fn test_selected_is_none_after_construction_and_load() {
        let mut table = name_table();
        assert!(table.selected().is_none());

        table
            .load_rows(Some(vec![name_record("A"), name_record("B")]))
            .unwrap();
        assert!(table.selected().is_none());
    }

    #[test]
    fn test_load_without_rows_uses_mock_data() {
        let mut table = Table::new(TableConfig::default()).unwrap();
        table.load_rows(None).unwrap();

        assert_eq!(table.len(), MOCK_ROW_COUNT);
        assert_eq!(table.rendered_rows(), MOCK_ROW_COUNT);
    }

    #[test]
    fn test_load_empty_rows_renders_sentinel() {
        let mut table = name_table();
        table.load_rows(Some(Vec::new())).unwrap();

        assert_eq!(table.rendered_rows(), 1);
        assert!(table.is_empty());

        let terminal = draw(&mut table);
        assert!(row_text(&terminal, BODY_Y).contains(PLACEHOLDER_TEXT));

        // The sentinel is not selectable.
        table.select_visual(0);
        assert!(table.selected().is_none());
    }

    #[test]
    fn test_sentinel_blanks_every_other_column() {
        let mut table = mixed_table();
        table.load_rows(Some(Vec::new())).unwrap();

        let terminal = draw(&mut table);
        let row = row_text(&terminal, BODY_Y);
        assert!(row.contains(PLACEHOLDER_TEXT));
        // Row number, placeholder, separators, and nothing else.
        let stripped: String = row
            .replace(PLACEHOLDER_TEXT, "")
            .replace('│', "")
            .replace('1', "")
            .trim()
            .to_string();
        assert!(stripped.is_empty(), "unexpected text: {:?}", stripped);
    }

    #[test]
    fn test_rows_render_at_their_visual_slots() {
        let mut table = name_table();
        table
            .load_rows(Some(vec![
                name_record("A"),
                name_record("B"),
                name_record("C"),
            ]))
            .unwrap();

        assert_eq!(table.rendered_rows(), 3);

        let terminal = draw(&mut table);
        for (index, name) in ["A", "B", "C"].iter().enumerate() {
            let row = row_text(&terminal, BODY_Y + index as u16);
            assert!(row.contains(name), "row {} missing {:?}", index, name);
            assert!(row.contains(&(index + 1).to_string()));
        }
    }

    #[test]
    fn test_header_shows_numbering_and_column_labels() {
        let mut table = name_table();
        table.load_rows(Some(vec![name_record("A")])).unwrap();

        let terminal = draw(&mut table);
        let header = row_text(&terminal, 1);
        assert!(header.contains(NUMBER_COLUMN_TITLE));
        assert!(header.contains("Name"));
    }

    #[test]
    fn test_selection_shades_only_the_selected_row() {
        let mut table = name_table();
        table
            .load_rows(Some(vec![name_record("A"), name_record("B")]))
            .unwrap();
        table.select_visual(1);

        let terminal = draw(&mut table);
        let buffer = terminal.backend().buffer();
        let shade = theme().selection;

        // First label cell starts after the border, row number, and rule.
        let cell_x = 1 + NUMBER_COLUMN_WIDTH + 1;
        assert_eq!(buffer[(cell_x, BODY_Y + 1)].style().bg, Some(shade));
        assert_eq!(buffer[(cell_x, BODY_Y)].style().bg, None);
    }

    #[test]
    fn test_selecting_another_row_moves_the_shading() {
        let mut table = name_table();
        table
            .load_rows(Some(vec![name_record("A"), name_record("B")]))
            .unwrap();

        table.select_visual(0);
        table.select_visual(1);
        assert_eq!(table.selected(), Some(&name_record("B")));

        let terminal = draw(&mut table);
        let buffer = terminal.backend().buffer();
        let cell_x = 1 + NUMBER_COLUMN_WIDTH + 1;
        assert_eq!(buffer[(cell_x, BODY_Y)].style().bg, None);
        assert_eq!(
            buffer[(cell_x, BODY_Y + 1)].style().bg,
            Some(theme().selection)
        );
    }

    #[test]
    fn test_load_rows_resets_selection() {
        let mut table = name_table();
        table.load_rows(Some(vec![name_record("A")])).unwrap();
        table.select_visual(0);
        assert!(table.selected().is_some());

        table.load_rows(Some(vec![name_record("B")])).unwrap();
        assert!(table.selected().is_none());
    }

    #[test]
    fn test_click_release_selects_the_hit_row() {
        let mut table = name_table();
        table
            .load_rows(Some(vec![name_record("A"), name_record("B")]))
            .unwrap();
        draw(&mut table);

        assert!(table.handle_mouse(release(3, BODY_Y + 1)));
        assert_eq!(table.selected(), Some(&name_record("B")));
    }

    #[test]
    fn test_click_accounts_for_scroll_offset() {
        let mut table = Table::new(TableConfig {
            height: Some(4),
            ..TableConfig::default()
        })
        .unwrap();
        table.load_rows(None).unwrap();
        draw(&mut table);

        table.scroll_by(5);
        draw(&mut table);

        assert!(table.handle_mouse(release(3, BODY_Y)));
        assert_eq!(table.selected(), table.records().get(5));
    }

    #[test]
    fn test_click_below_the_last_row_is_ignored() {
        let mut table = name_table();
        table.load_rows(Some(vec![name_record("A")])).unwrap();
        draw(&mut table);

        assert!(!table.handle_mouse(release(3, BODY_Y + 5)));
        assert!(table.selected().is_none());
    }

    #[test]
    fn test_wheel_scrolls_and_clamps() {
        let mut table = Table::new(TableConfig::default()).unwrap();
        table.load_rows(None).unwrap();
        draw(&mut table);

        // 12 visible body rows of 30.
        let max = MOCK_ROW_COUNT - 12;

        assert!(table.handle_mouse(wheel(true)));
        assert_eq!(table.scroll_offset(), WHEEL_SCROLL_LINES);

        for _ in 0..MOCK_ROW_COUNT {
            table.handle_mouse(wheel(true));
        }
        assert_eq!(table.scroll_offset(), max);

        for _ in 0..MOCK_ROW_COUNT {
            table.handle_mouse(wheel(false));
        }
        assert_eq!(table.scroll_offset(), 0);
    }

    #[test]
    fn test_click_on_selected_dropdown_cell_cycles_the_candidate() {
        let mut table = mixed_table();
        let record: Record = [
            ("name", CellValue::text("task")),
            ("status", CellValue::choices(["open", "closed"])),
        ]
        .into_iter()
        .collect();
        table.load_rows(Some(vec![record])).unwrap();
        draw(&mut table);

        assert_eq!(table.dropdown_choice(0, "status"), Some("open"));

        // Border + number column + rule + name column + rule puts the
        // status cell at x = 28.
        let status_x = 1 + NUMBER_COLUMN_WIDTH + 1 + 20 + 1;

        // First release selects the row.
        table.handle_mouse(release(status_x, BODY_Y));
        assert!(table.selected().is_some());
        assert_eq!(table.dropdown_choice(0, "status"), Some("open"));

        // Release on the already-selected row's dropdown cell cycles it.
        table.handle_mouse(release(status_x, BODY_Y));
        assert_eq!(table.dropdown_choice(0, "status"), Some("closed"));

        table.handle_mouse(release(status_x, BODY_Y));
        assert_eq!(table.dropdown_choice(0, "status"), Some("open"));
    }

    #[test]
    fn test_delete_without_selection_never_prompts() {
        let mut table = name_table();
        table.load_rows(Some(vec![name_record("A")])).unwrap();

        let mut confirm = CannedConfirm::new(true);
        assert_eq!(table.delete_selected(&mut confirm), None);
        assert_eq!(confirm.prompts, 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_declined_delete_changes_nothing() {
        let mut table = name_table();
        table
            .load_rows(Some(vec![name_record("A"), name_record("B")]))
            .unwrap();
        table.select_visual(1);

        let mut confirm = CannedConfirm::new(false);
        assert_eq!(table.delete_selected(&mut confirm), None);
        assert_eq!(confirm.prompts, 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.selected(), Some(&name_record("B")));
    }

    #[test]
    fn test_confirmed_delete_removes_and_reselects_the_slot() {
        let mut table = name_table();
        table
            .load_rows(Some(vec![
                name_record("A"),
                name_record("B"),
                name_record("C"),
            ]))
            .unwrap();
        table.select_visual(1);

        let mut confirm = CannedConfirm::new(true);
        let removed = table.delete_selected(&mut confirm);

        assert_eq!(removed, Some(name_record("B")));
        assert_eq!(table.records(), &[name_record("A"), name_record("C")]);
        // The row that moved into the freed slot is selected.
        assert_eq!(table.selected(), Some(&name_record("C")));
    }

    #[test]
    fn test_delete_at_the_last_slot_selects_the_previous_row() {
        let mut table = name_table();
        table
            .load_rows(Some(vec![name_record("A"), name_record("B")]))
            .unwrap();
        table.select_visual(1);

        let mut confirm = CannedConfirm::new(true);
        let removed = table.delete_selected(&mut confirm);

        assert_eq!(removed, Some(name_record("B")));
        assert_eq!(table.records(), &[name_record("A")]);
        assert_eq!(table.selected(), Some(&name_record("A")));
    }

    #[test]
    fn test_deleting_the_last_remaining_row_shows_the_sentinel() {
        let mut table = name_table();
        table.load_rows(Some(vec![name_record("A")])).unwrap();
        table.select_visual(0);

        let mut confirm = CannedConfirm::new(true);
        let removed = table.delete_selected(&mut confirm);

        assert_eq!(removed, Some(name_record("A")));
        assert!(table.is_empty());
        assert!(table.selected().is_none());
        assert_eq!(table.rendered_rows(), 1);

        let terminal = draw(&mut table);
        assert!(row_text(&terminal, BODY_Y).contains(PLACEHOLDER_TEXT));
    }

    #[test]
    fn test_missing_field_fails_load_and_keeps_previous_rows() {
        let mut table = mixed_table();
        let good: Record = [
            ("name", CellValue::text("task")),
            ("status", CellValue::choices(["open"])),
        ]
        .into_iter()
        .collect();
        table.load_rows(Some(vec![good.clone()])).unwrap();

        let bad = name_record("incomplete");
        let err = table.load_rows(Some(vec![good.clone(), bad])).unwrap_err();

        assert_eq!(err, TableError::missing_field("status", 1));
        assert_eq!(table.records(), &[good]);
        assert_eq!(table.rendered_rows(), 1);
    }

    #[test]
    fn test_keyboard_navigation_moves_the_selection() {
        let mut table = name_table();
        table
            .load_rows(Some(vec![name_record("A"), name_record("B")]))
            .unwrap();
        draw(&mut table);

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);

        assert!(table.handle_key(down));
        assert_eq!(table.selected(), Some(&name_record("A")));

        table.handle_key(down);
        assert_eq!(table.selected(), Some(&name_record("B")));

        // Already at the bottom.
        table.handle_key(down);
        assert_eq!(table.selected(), Some(&name_record("B")));

        table.handle_key(up);
        assert_eq!(table.selected(), Some(&name_record("A")));
    }

    #[test]
    fn test_unhandled_keys_are_reported() {
        let mut table = name_table();
        assert!(!table.handle_key(KeyEvent::new(
            KeyCode::Char('x'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn test_select_and_delete_flow() {
        // columns [Name], field keys [name], rows A and B: select B,
        // confirm deletion, and A takes over the selection.
        let mut table = name_table();
        table
            .load_rows(Some(vec![name_record("A"), name_record("B")]))
            .unwrap();
        assert_eq!(table.rendered_rows(), 2);
        draw(&mut table);

        table.handle_mouse(release(3, BODY_Y + 1));
        assert_eq!(table.selected(), Some(&name_record("B")));

        let mut confirm = CannedConfirm::new(true);
        let removed = table.delete_selected(&mut confirm);

        assert_eq!(removed, Some(name_record("B")));
        assert_eq!(table.records(), &[name_record("A")]);
        assert_eq!(table.selected(), Some(&name_record("A")));
    }
}
