//! User interface components.
//!
//! This module contains the table widget itself, the cell widgets it is
//! built from, the confirmation dialog, and the shared theme.

mod components;
pub mod theme;

pub use components::{
    render_key_hints, CellWidget, ConfirmAction, ConfirmDialog, Confirmation, DropdownCell, Table,
    TableConfig, PLACEHOLDER_TEXT,
};
pub use theme::{init_theme, theme, Theme};
