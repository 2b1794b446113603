//! Yes/no confirmation for destructive actions.
//!
//! Deletion blocks on a [`Confirmation`] service supplied by the embedding
//! application. The module also provides [`ConfirmDialog`], a modal yes/no
//! component hosts can drive from their own event loop; the demo
//! application wraps it in a nested blocking loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// Answers yes/no questions on behalf of the user.
///
/// Invoked synchronously while the caller blocks; implementations decide
/// how the question is posed (modal dialog, canned answer in tests).
pub trait Confirmation {
    /// Ask the user to confirm. Returns `true` only on an explicit yes.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirmation for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Action resulting from dialog input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// The user confirmed.
    Confirm,
    /// The user declined or dismissed the dialog.
    Cancel,
}

/// A modal yes/no dialog.
///
/// One of two buttons is armed at a time; arrow keys, `h`/`l` and Tab move
/// between them, Enter fires the armed button, and `y`/`n` answer
/// directly. The dialog arms No, so a stray Enter never deletes.
#[derive(Debug)]
pub struct ConfirmDialog {
    /// Dialog title.
    title: String,
    /// Question shown in the dialog body.
    message: String,
    /// Whether the Yes button is armed.
    yes_armed: bool,
}

impl ConfirmDialog {
    /// Create a new dialog with the given title and question.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            yes_armed: false,
        }
    }

    /// Whether the Yes button is currently armed.
    pub fn yes_armed(&self) -> bool {
        self.yes_armed
    }

    /// Handle keyboard input.
    ///
    /// Returns the resulting action once the user answers, `None` while
    /// the dialog stays open.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ConfirmAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Left, _)
            | (KeyCode::Right, _)
            | (KeyCode::Tab, _)
            | (KeyCode::Char('h'), KeyModifiers::NONE)
            | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                self.yes_armed = !self.yes_armed;
                None
            }
            (KeyCode::Enter, KeyModifiers::NONE) => {
                if self.yes_armed {
                    Some(ConfirmAction::Confirm)
                } else {
                    Some(ConfirmAction::Cancel)
                }
            }
            (KeyCode::Char('y'), KeyModifiers::NONE) => Some(ConfirmAction::Confirm),
            (KeyCode::Char('n'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
                Some(ConfirmAction::Cancel)
            }
            _ => None,
        }
    }

    /// Render the dialog centered in the given area.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let width = (self.message.len() as u16 + 8)
            .max(self.title.len() as u16 + 6)
            .max(30)
            .min(area.width);
        let height = 7.min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.border_focused));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let armed = Style::default()
            .fg(t.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED);
        let idle = Style::default().fg(t.fg);
        let (yes_style, no_style) = if self.yes_armed {
            (armed, idle)
        } else {
            (idle, armed)
        };

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(self.message.clone()),
            Line::from(""),
            Line::from(vec![
                Span::styled("[ Yes ]", yes_style),
                Span::raw("   "),
                Span::styled("[ No ]", no_style),
            ]),
        ])
        .alignment(Alignment::Center);

        frame.render_widget(body, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dialog_arms_no_by_default() {
        let dialog = ConfirmDialog::new("Title", "Sure?");
        assert!(!dialog.yes_armed());
    }

    #[test]
    fn test_enter_fires_armed_button() {
        let mut dialog = ConfirmDialog::new("Title", "Sure?");
        assert_eq!(
            dialog.handle_input(key(KeyCode::Enter)),
            Some(ConfirmAction::Cancel)
        );

        dialog.handle_input(key(KeyCode::Left));
        assert!(dialog.yes_armed());
        assert_eq!(
            dialog.handle_input(key(KeyCode::Enter)),
            Some(ConfirmAction::Confirm)
        );
    }

    #[test]
    fn test_tab_toggles_buttons() {
        let mut dialog = ConfirmDialog::new("Title", "Sure?");
        dialog.handle_input(key(KeyCode::Tab));
        assert!(dialog.yes_armed());
        dialog.handle_input(key(KeyCode::Tab));
        assert!(!dialog.yes_armed());
    }

    #[test]
    fn test_direct_answers() {
        let mut dialog = ConfirmDialog::new("Title", "Sure?");
        assert_eq!(
            dialog.handle_input(key(KeyCode::Char('y'))),
            Some(ConfirmAction::Confirm)
        );
        assert_eq!(
            dialog.handle_input(key(KeyCode::Char('n'))),
            Some(ConfirmAction::Cancel)
        );
        assert_eq!(
            dialog.handle_input(key(KeyCode::Esc)),
            Some(ConfirmAction::Cancel)
        );
    }

    #[test]
    fn test_other_keys_keep_dialog_open() {
        let mut dialog = ConfirmDialog::new("Title", "Sure?");
        assert_eq!(dialog.handle_input(key(KeyCode::Char('x'))), None);
        assert_eq!(dialog.handle_input(key(KeyCode::Up)), None);
    }

    #[test]
    fn test_closure_implements_confirmation() {
        let mut always_yes = |_: &str| true;
        assert!(always_yes.confirm("delete?"));
    }
}
