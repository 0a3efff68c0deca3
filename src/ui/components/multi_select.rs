//! Multi-select component: toggleable options rendered as badges

use super::{dismissible_badge_span, field_title, input_border, render_scrollable_list, ColorRole};
use crate::form::{label_for, Choice, FieldState};
use crate::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

/// Render the multi-select field row; chosen values show as dismissible
/// badges
pub fn render_multi_select(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    options: &[Choice],
    palette: &Palette,
    active: bool,
) {
    let values = field.value.as_selection();
    let mut spans = Vec::new();
    if values.is_empty() {
        let placeholder = field.placeholder.as_deref().unwrap_or("(none)");
        spans.push(Span::styled(placeholder.to_string(), palette.muted_text()));
    } else {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(dismissible_badge_span(
                label_for(options, value),
                ColorRole::Default,
                palette,
            ));
        }
    }
    if active {
        spans.push(Span::styled(" ▾", palette.muted_text()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(input_border(field, palette, active))
        .title(field_title(field));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render the toggle dropdown over the given area
pub fn render_multi_overlay(
    frame: &mut Frame,
    area: Rect,
    options: &[Choice],
    selected: &[String],
    highlight: usize,
    palette: &Palette,
) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(true))
        .title(" Space toggles, enter closes ")
        .style(
            Style::default()
                .bg(palette.popover)
                .fg(palette.popover_foreground),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items: Vec<ListItem> = options
        .iter()
        .map(|choice| {
            let mark = if selected.contains(&choice.value) {
                "[x] "
            } else {
                "[ ] "
            };
            ListItem::new(format!("{mark}{}", choice.label))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(palette.accent)
                .fg(palette.accent_foreground),
        )
        .highlight_symbol("▸ ");
    render_scrollable_list(frame, inner, list, highlight);
}
