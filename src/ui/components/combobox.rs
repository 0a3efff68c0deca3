//! Combobox component: a text lookup backed by a server-side search

use super::{field_title, input_border, render_scrollable_list, spinner_span};
use crate::form::{label_for, Choice, FieldState};
use crate::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

/// Render the combobox field row; a committed id renders with its label
pub fn render_combobox(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    options: &[Choice],
    palette: &Palette,
    active: bool,
) {
    let mut spans = match field.value.as_choice() {
        Some(value) => vec![Span::styled(
            label_for(options, value).to_string(),
            palette.text(),
        )],
        None => {
            let placeholder = field.placeholder.as_deref().unwrap_or("(none)");
            vec![Span::styled(placeholder.to_string(), palette.muted_text())]
        }
    };
    if active {
        spans.push(Span::styled(" ▾", palette.muted_text()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(input_border(field, palette, active))
        .title(field_title(field));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render the search dropdown over the given area
#[allow(clippy::too_many_arguments)]
pub fn render_combo_overlay(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    results: &[Choice],
    highlight: usize,
    loading: bool,
    tick: u64,
    palette: &Palette,
) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(true))
        .title(format!(" Search: {query}▌ "))
        .style(
            Style::default()
                .bg(palette.popover)
                .fg(palette.popover_foreground),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if loading {
        let line = Line::from(vec![
            spinner_span(tick, palette),
            Span::styled(" Searching…", palette.muted_text()),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
        return;
    }

    if results.is_empty() {
        let hint = if query.is_empty() {
            "Type to search"
        } else {
            "No matches"
        };
        frame.render_widget(Paragraph::new(hint).style(palette.muted_text()), inner);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .map(|choice| ListItem::new(choice.label.clone()))
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
