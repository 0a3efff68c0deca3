//! Checkbox component for TUI

use crate::form::FieldState;
use crate::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render a single-row checkbox bound to a boolean field; space toggles
pub fn render_checkbox(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    palette: &Palette,
    active: bool,
) {
    let checked = field.value.as_bool();
    let mark_style = if checked {
        Style::default().fg(palette.primary)
    } else {
        palette.muted_text()
    };
    let label_style = if active {
        Style::default()
            .fg(palette.ring)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.text()
    };

    let line = Line::from(vec![
        Span::styled(if checked { "[x]" } else { "[ ]" }, mark_style),
        Span::raw(" "),
        Span::styled(field.label.clone(), label_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
