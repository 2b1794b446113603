//! Demo application hosting the table widget.
//!
//! Mirrors how an embedding application drives the widget: it owns a
//! [`Table`] built from the mock configuration, forwards keyboard and
//! mouse events to it, and answers deletion prompts through a blocking
//! modal dialog.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::warn;

use crate::error::TableError;
use crate::events::{Event, EventHandler};
use crate::record::Record;
use crate::ui::{
    render_key_hints, theme, ConfirmAction, ConfirmDialog, Confirmation, Table, TableConfig,
};

/// Key hints shown at the bottom of the screen.
const KEY_HINTS: &str =
    "[click] select  [wheel] scroll  [j/k] move  [d] delete  [r] reload  [e] empty  [q] quit";

/// The demo application state.
pub struct App {
    /// The hosted table widget.
    table: Table,
    /// Whether the application should quit.
    should_quit: bool,
    /// Status message describing the last action.
    status: String,
}

impl App {
    /// Create the application around a table built from `config`.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        Ok(Self {
            table: Table::new(config)?,
            should_quit: false,
            status: String::new(),
        })
    }

    /// Load rows into the hosted table.
    pub fn load(&mut self, rows: Option<Vec<Record>>) -> Result<(), TableError> {
        self.table.load_rows(rows)
    }

    /// The hosted table.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Render the full demo screen.
    pub fn draw(&mut self, frame: &mut Frame) {
        let t = theme();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let title = Paragraph::new(Span::styled(
            " rowtable demo ",
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, chunks[0]);

        self.table.render(frame, chunks[1]);

        let status = Line::from(vec![
            Span::styled(self.status.clone(), Style::default().fg(t.fg)),
            Span::styled(
                format!("  rows: {}", self.table.len()),
                Style::default().fg(t.dim),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), chunks[2]);

        render_key_hints(frame, chunks[3], KEY_HINTS);
    }

    /// Handle a key press.
    ///
    /// The terminal is needed to run the blocking confirmation dialog
    /// when a deletion is requested.
    pub fn on_key<B: Backend>(&mut self, key: KeyEvent, terminal: &mut Terminal<B>) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.delete_selected(terminal);
            }
            KeyCode::Char('r') => {
                self.reload(None, "Mock rows loaded");
            }
            KeyCode::Char('e') => {
                self.reload(Some(Vec::new()), "Rows cleared");
            }
            _ => {
                self.table.handle_key(key);
            }
        }
    }

    /// Handle a mouse event.
    pub fn on_mouse(&mut self, event: MouseEvent) {
        self.table.handle_mouse(event);
    }

    /// Replace the table's rows and report the outcome in the status line.
    fn reload(&mut self, rows: Option<Vec<Record>>, message: &str) {
        match self.table.load_rows(rows) {
            Ok(()) => self.status = message.to_string(),
            Err(err) => self.status = format!("Load failed: {}", err),
        }
    }

    /// Delete the selected row behind a blocking confirmation dialog.
    fn delete_selected<B: Backend>(&mut self, terminal: &mut Terminal<B>) {
        if self.table.selected().is_none() {
            self.status = "Nothing selected".to_string();
            return;
        }

        let mut confirm = ModalConfirm { terminal };
        match self.table.delete_selected(&mut confirm) {
            Some(_) => self.status = format!("Row deleted, {} left", self.table.len()),
            None => self.status = "Deletion cancelled".to_string(),
        }
    }
}

/// Blocking confirmation service rendering a modal [`ConfirmDialog`].
///
/// Runs a nested event loop on the shared terminal until the user
/// answers; the deletion call stays blocked for that whole time.
struct ModalConfirm<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
}

impl<B: Backend> Confirmation for ModalConfirm<'_, B> {
    fn confirm(&mut self, message: &str) -> bool {
        let mut dialog = ConfirmDialog::new("Deletion Confirmation", message);
        loop {
            if let Err(err) = self
                .terminal
                .draw(|frame| dialog.render(frame, frame.area()))
            {
                warn!(%err, "confirmation dialog draw failed");
                return false;
            }
            match event::read() {
                Ok(CrosstermEvent::Key(key)) => {
                    if let Some(action) = dialog.handle_input(key) {
                        return action == ConfirmAction::Confirm;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(%err, "confirmation dialog input failed");
                    return false;
                }
            }
        }
    }
}

/// Run the application event loop until the user quits.
pub fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> anyhow::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame))?;
        match events.next()? {
            Event::Key(key) => app.on_key(key, terminal),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            Event::Resize(_, _) | Event::Tick => {}
        }
    }
    Ok(())
}
