//! A scrollable record-table widget for ratatui.
//!
//! The widget renders an ordered collection of dictionary-like records as
//! a grid of labeled cells below a fixed header: a row-number column plus
//! one cell per declared column, where each column is a static label, a
//! single-select dropdown, or a read-only text field. It supports
//! single-row selection with background shading, row deletion behind a
//! yes/no confirmation, and mouse-wheel/scrollbar vertical scrolling.
//!
//! Rows are supplied after construction and replaced wholesale on every
//! load; loading an empty collection renders a single "nothing found"
//! placeholder row. Every declaration is optional: with none at all the
//! widget falls back to a built-in mock configuration, so it is always
//! independently demonstrable (`cargo run` starts the demo application).
//!
//! ```no_run
//! use rowtable::{CellKind, CellValue, Column, Record, Table, TableConfig};
//!
//! # fn main() -> Result<(), rowtable::TableError> {
//! let mut table = Table::new(TableConfig {
//!     field_keys: vec!["name".into(), "status".into()],
//!     columns: vec![
//!         Column::new("Name", 20, CellKind::Label),
//!         Column::new("Status", 12, CellKind::Dropdown),
//!     ],
//!     width: None,
//!     height: None,
//! })?;
//!
//! let row: Record = [
//!     ("name", CellValue::text("first entry")),
//!     ("status", CellValue::choices(["open", "done"])),
//! ]
//! .into_iter()
//! .collect();
//! table.load_rows(Some(vec![row]))?;
//! assert!(table.selected().is_none());
//! # Ok(())
//! # }
//! ```
//!
//! Inside a ratatui draw closure, call [`Table::render`] with the frame
//! and the area the widget should occupy, and forward key and mouse
//! events to [`Table::handle_key`] and [`Table::handle_mouse`].

pub mod app;
pub mod error;
pub mod events;
pub mod logging;
pub mod record;
pub mod ui;

pub use error::TableError;
pub use record::{CellKind, CellValue, Column, Record};
pub use ui::{
    CellWidget, ConfirmAction, ConfirmDialog, Confirmation, Table, TableConfig, PLACEHOLDER_TEXT,
};
