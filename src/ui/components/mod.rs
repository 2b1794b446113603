//! Reusable UI components.

mod cell;
mod confirm;
mod help_bar;
mod table;

pub use cell::{CellWidget, DropdownCell};
pub use confirm::{ConfirmAction, ConfirmDialog, Confirmation};
pub use help_bar::render_key_hints;
pub use table::{Table, TableConfig, PLACEHOLDER_TEXT};
