//! Event handling for the demo application.
//!
//! This module polls the terminal for keyboard, mouse, and resize events
//! and hands them to the application loop.

mod handler;

use crossterm::event::{KeyEvent, MouseEvent};

pub use handler::EventHandler;

/// An event delivered to the application loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// A mouse click, release, or wheel movement.
    Mouse(MouseEvent),
    /// The terminal was resized to the given width and height.
    Resize(u16, u16),
    /// No terminal event occurred within the tick rate.
    Tick,
}
