//! Text input component for TUI

use super::{field_title, input_border};
use crate::form::FieldState;
use crate::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Render a single- or multi-line text input bound to a text field.
/// Masked fields draw their obfuscated display value.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    palette: &Palette,
    active: bool,
) {
    let display = field.display_value();
    let cursor = Span::styled(if active { "▌" } else { "" }, Style::default().fg(palette.ring));

    let content = if display.is_empty() {
        let mut spans = vec![cursor];
        if let Some(placeholder) = &field.placeholder {
            spans.push(Span::styled(placeholder.clone(), palette.muted_text()));
        }
        Paragraph::new(Line::from(spans))
    } else if field.multiline {
        let mut lines: Vec<Line> = display.lines().map(|l| Line::from(l.to_string())).collect();
        match lines.last_mut() {
            Some(last) => last.spans.push(cursor),
            None => lines.push(Line::from(cursor)),
        }
        Paragraph::new(lines).wrap(Wrap { trim: false })
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display, palette.text()),
            cursor,
        ]))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(input_border(field, palette, active))
        .title(field_title(field));
    frame.render_widget(content.block(block), area);
}
