//! Radio group component for TUI

use crate::form::{Choice, FieldState};
use crate::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render an inline radio group bound to a choice field; ←/→ move the
/// selection
pub fn render_radio_group(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    options: &[Choice],
    palette: &Palette,
    active: bool,
) {
    let selected = field.value.as_choice();
    let label_style = if active {
        Style::default()
            .fg(palette.ring)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.text()
    };

    let mut spans = vec![Span::styled(format!("{}:", field.label), label_style)];
    for option in options {
        spans.push(Span::raw("  "));
        let chosen = selected == Some(option.value.as_str());
        let style = if chosen {
            Style::default().fg(palette.primary)
        } else {
            palette.muted_text()
        };
        let mark = if chosen { "(•)" } else { "( )" };
        spans.push(Span::styled(format!("{mark} {}", option.label), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
