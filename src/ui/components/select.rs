//! Closed select component for TUI

use super::{field_title, input_border};
use crate::form::{label_for, Choice, FieldState};
use crate::theme::Palette;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render a closed select; the active field cycles options with ←/→
pub fn render_select(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    options: &[Choice],
    palette: &Palette,
    active: bool,
) {
    let line = match field.value.as_choice() {
        Some(value) => {
            let label = label_for(options, value).to_string();
            if active {
                Line::from(vec![
                    Span::styled("◂ ", palette.muted_text()),
                    Span::styled(label, palette.text()),
                    Span::styled(" ▸", palette.muted_text()),
                ])
            } else {
                Line::from(Span::styled(label, palette.text()))
            }
        }
        None => {
            let placeholder = field.placeholder.as_deref().unwrap_or("(none)");
            if active {
                Line::from(vec![
                    Span::styled("◂ ", palette.muted_text()),
                    Span::styled(placeholder.to_string(), palette.muted_text()),
                    Span::styled(" ▸", palette.muted_text()),
                ])
            } else {
                Line::from(Span::styled(placeholder.to_string(), palette.muted_text()))
            }
        }
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(input_border(field, palette, active))
        .title(field_title(field));
    frame.render_widget(Paragraph::new(line).block(block), area);
}
