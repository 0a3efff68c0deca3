//! Switch component for TUI

use crate::form::FieldState;
use crate::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render a single-row switch bound to a boolean field; space flips it
pub fn render_switch(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    palette: &Palette,
    active: bool,
) {
    let on = field.value.as_bool();
    let label_style = if active {
        Style::default()
            .fg(palette.ring)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.text()
    };

    // Track with the knob on the lit side
    let track = if on {
        vec![
            Span::styled("━━", palette.muted_text()),
            Span::styled("◉", Style::default().fg(palette.primary)),
        ]
    } else {
        vec![
            Span::styled("◉", palette.muted_text()),
            Span::styled("━━", palette.muted_text()),
        ]
    };

    let mut spans = track;
    spans.push(Span::raw(" "));
    spans.push(Span::styled(field.label.clone(), label_style));
    spans.push(Span::styled(
        if on { "  on" } else { "  off" },
        palette.muted_text(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
