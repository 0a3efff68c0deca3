//! Catalog view: variant tables for the display components

use super::components::{
    badge_span, dismissible_badge_span, render_button, spinner_span, BadgeVariant, ButtonVariant,
    ColorRole, BUTTON_HEIGHT,
};
use crate::app::App;
use crate::state::CATALOG_SECTIONS;
use crate::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the component catalog, one card per section; `catalog_scroll`
/// indexes the first visible section
pub fn draw_catalog(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.palette();
    let first = app.state.catalog_scroll.min(CATALOG_SECTIONS - 1) as usize;

    let heights = [button_card_height(), 6u16, 5u16];
    let mut constraints: Vec<Constraint> = (first..heights.len())
        .map(|i| Constraint::Length(heights[i]))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, section) in (first..heights.len()).enumerate() {
        match section {
            0 => render_buttons_card(frame, chunks[slot], &palette),
            1 => render_badges_card(frame, chunks[slot], &palette),
            _ => render_indicators_card(frame, chunks[slot], app.state.tick, &palette),
        }
    }
}

/// One button row per variant, plus a row for the selected/disabled states
fn button_card_height() -> u16 {
    (ButtonVariant::ALL.len() as u16 + 1) * BUTTON_HEIGHT + 2
}

fn render_buttons_card(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(false))
        .title(" Buttons ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(BUTTON_HEIGHT); ButtonVariant::ALL.len() + 1];
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let role_columns = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, ColorRole::ALL.len() as u32); 5])
            .split(row)
    };

    for (row, variant) in ButtonVariant::ALL.iter().enumerate() {
        let cols = role_columns(rows[row]);
        for (col, role) in ColorRole::ALL.iter().enumerate() {
            render_button(
                frame,
                cols[col],
                role.label(),
                *variant,
                *role,
                palette,
                false,
                true,
            );
        }
    }

    let states = role_columns(rows[ButtonVariant::ALL.len()]);
    render_button(
        frame,
        states[0],
        "selected",
        ButtonVariant::Solid,
        ColorRole::Primary,
        palette,
        true,
        true,
    );
    render_button(
        frame,
        states[1],
        "disabled",
        ButtonVariant::Solid,
        ColorRole::Primary,
        palette,
        false,
        false,
    );
}

fn render_badges_card(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(false))
        .title(" Badges ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for variant in BadgeVariant::ALL {
        let mut spans = vec![Span::styled(
            format!("{:<9}", variant.label()),
            palette.muted_text(),
        )];
        for role in ColorRole::ALL {
            spans.push(Span::raw(" "));
            spans.push(badge_span(role.label(), variant, role, palette));
        }
        lines.push(Line::from(spans));
    }

    let mut spans = vec![Span::styled(format!("{:<9}", "dismiss"), palette.muted_text())];
    for role in ColorRole::ALL {
        spans.push(Span::raw(" "));
        spans.push(dismissible_badge_span(role.label(), role, palette));
    }
    lines.push(Line::from(spans));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_indicators_card(frame: &mut Frame, area: Rect, tick: u64, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(false))
        .title(" Indicators ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(vec![
        spinner_span(tick, palette),
        Span::raw(" "),
        Span::styled("Loading…", palette.muted_text()),
    ])];

    let roles: [(&str, Color, Color); 5] = [
        ("primary", palette.primary, palette.primary_foreground),
        ("secondary", palette.secondary, palette.secondary_foreground),
        ("accent", palette.accent, palette.accent_foreground),
        ("muted", palette.muted, palette.muted_foreground),
        ("destructive", palette.destructive, palette.destructive_foreground),
    ];
    let statuses: [(&str, Color, Color); 4] = [
        ("success", palette.success, palette.success_foreground),
        ("warning", palette.warning, palette.warning_foreground),
        ("error", palette.error, palette.error_foreground),
        ("info", palette.info, palette.info_foreground),
    ];
    for group in [&roles[..], &statuses[..]] {
        let mut spans = Vec::new();
        for (i, (name, base, fg)) in group.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {name} "),
                Style::default().bg(*base).fg(*fg),
            ));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
