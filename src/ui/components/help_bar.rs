//! Key-hint bar component.
//!
//! Displays a single line of keyboard shortcut hints at the bottom of the
//! screen, e.g. `[d] delete  [r] reload  [q] quit`.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::theme;

/// Render a line of key hints.
///
/// Bracketed key names are highlighted; the rest renders dimmed.
pub fn render_key_hints(frame: &mut Frame, area: Rect, hints: &str) {
    let line = Line::from(hint_spans(hints));
    frame.render_widget(Paragraph::new(line), area);
}

/// Split hint text into styled spans, one per bracketed key or plain run.
fn hint_spans(hints: &str) -> Vec<Span<'static>> {
    let t = theme();
    let key_style = Style::default().fg(t.success);
    let text_style = Style::default().fg(t.dim);

    let mut spans = Vec::new();
    let mut rest = hints;
    while let Some(open) = rest.find('[') {
        let (before, bracketed) = rest.split_at(open);
        if !before.is_empty() {
            spans.push(Span::styled(before.to_string(), text_style));
        }
        match bracketed.find(']') {
            Some(close) => {
                spans.push(Span::styled(bracketed[..=close].to_string(), key_style));
                rest = &bracketed[close + 1..];
            }
            None => {
                spans.push(Span::styled(bracketed.to_string(), text_style));
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }
    spans
}
