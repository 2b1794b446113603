//! Data model for the table widget.
//!
//! A table displays an ordered collection of [`Record`]s. Each record maps
//! field keys to [`CellValue`]s, and a parallel list of [`Column`]
//! descriptors declares how each field is rendered. The module also
//! provides the built-in mock configuration used whenever the embedding
//! application omits its own declarations, so the widget is always
//! independently demonstrable.

use std::collections::HashMap;

/// How a column renders its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Static text label.
    Label,
    /// Single-select dropdown locked to its candidate list.
    Dropdown,
    /// Text field that displays a value but forbids typing.
    ReadOnly,
}

impl CellKind {
    /// Parse a cell kind from its external string form.
    ///
    /// Accepts the long names (`"label"`, `"dropdown"`, `"readonly-field"`)
    /// as well as the legacy one-letter codes (`"l"`, `"c"`, `"e"`).
    /// Unrecognized strings yield `None`; a column built from an
    /// unrecognized kind renders no cell at all.
    pub fn parse(s: &str) -> Option<CellKind> {
        match s {
            "label" | "l" => Some(CellKind::Label),
            "dropdown" | "c" => Some(CellKind::Dropdown),
            "readonly-field" | "e" => Some(CellKind::ReadOnly),
            _ => None,
        }
    }
}

/// Declaration of a single table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text displayed for the column.
    pub text: String,
    /// Fixed display width in character cells.
    pub width: u16,
    /// How cells in this column are rendered.
    pub kind: CellKind,
}

impl Column {
    /// Create a new column descriptor.
    pub fn new(text: impl Into<String>, width: u16, kind: CellKind) -> Self {
        Self {
            text: text.into(),
            width,
            kind,
        }
    }
}

/// The display value a record holds for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    /// Plain text, shown by label and read-only cells.
    Text(String),
    /// Candidate strings for a dropdown cell; the first is pre-selected.
    Choices(Vec<String>),
}

impl CellValue {
    /// Create a text value.
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Create a candidate-list value.
    pub fn choices<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CellValue::Choices(candidates.into_iter().map(Into::into).collect())
    }

    /// The text this value displays: the text itself, or the first
    /// candidate of a candidate list (empty if there are none).
    pub fn display_text(&self) -> &str {
        match self {
            CellValue::Text(s) => s,
            CellValue::Choices(candidates) => {
                candidates.first().map(String::as_str).unwrap_or("")
            }
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Text(String::new())
    }
}

/// One table row: a mapping from field key to display value.
///
/// Records are compared by value; the widget removes deleted rows from its
/// collection by value equality. Every record loaded into a table must
/// contain all of the table's declared field keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record(HashMap<String, CellValue>);

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a field key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: CellValue) {
        self.0.insert(key.into(), value);
    }

    /// Look up the value for a field key.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.0.get(key)
    }

    /// Whether the record contains the given field key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, CellValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, CellValue)>>(iter: T) -> Self {
        Record(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

/// Number of rows in the built-in mock data set.
pub const MOCK_ROW_COUNT: usize = 30;

/// Field keys of the built-in mock configuration.
pub fn mock_field_keys() -> Vec<String> {
    (1..=4).map(|n| format!("col{}", n)).collect()
}

/// Column descriptors of the built-in mock configuration.
pub fn mock_columns() -> Vec<Column> {
    (1..=4)
        .map(|n| Column::new(format!("Column {}", n), 15, CellKind::Label))
        .collect()
}

/// The built-in mock rows, used when no row data is supplied.
pub fn mock_records() -> Vec<Record> {
    (1..=MOCK_ROW_COUNT)
        .map(|row| {
            (1..=4)
                .map(|col| {
                    (
                        format!("col{}", col),
                        CellValue::text(format!("value of col {} row {}", col, row)),
                    )
                })
                .collect()
        })
        .collect()
}
