//! Date picker component with a calendar overlay

use super::{field_title, input_border};
use crate::form::FieldState;
use crate::theme::Palette;
use chrono::{Datelike, NaiveDate};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Render the date field row; enter opens the calendar
pub fn render_date_picker(
    frame: &mut Frame,
    area: Rect,
    field: &FieldState,
    palette: &Palette,
    active: bool,
) {
    let display = field.display_value();
    let mut spans = if display.is_empty() {
        let placeholder = field.placeholder.as_deref().unwrap_or("YYYY-MM-DD");
        vec![Span::styled(placeholder.to_string(), palette.muted_text())]
    } else {
        vec![Span::styled(display, palette.text())]
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

/// Render the month calendar over the given area. Arrows move the cursor
/// by day and week, page keys by month.
pub fn render_calendar_overlay(
    frame: &mut Frame,
    area: Rect,
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
    palette: &Palette,
) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(true))
        .title(format!(" {} ", cursor.format("%B %Y")))
        .style(
            Style::default()
                .bg(palette.popover)
                .fg(palette.popover_foreground),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        "Mo Tu We Th Fr Sa Su",
        palette.muted_text(),
    ))];
    for week in month_weeks(cursor) {
        let mut spans = Vec::new();
        for (i, slot) in week.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            match slot {
                Some(day) => spans.push(day_span(cursor, selected, *day, palette)),
                None => spans.push(Span::raw("  ")),
            }
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn day_span(
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
    day: u32,
    palette: &Palette,
) -> Span<'static> {
    let text = format!("{day:>2}");
    let is_cursor = day == cursor.day();
    let is_selected = selected
        .is_some_and(|d| d.year() == cursor.year() && d.month() == cursor.month() && d.day() == day);
    let style = if is_cursor {
        Style::default()
            .bg(palette.accent)
            .fg(palette.accent_foreground)
    } else if is_selected {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.popover_foreground)
    };
    Span::styled(text, style)
}

/// Lay the cursor's month out as Monday-first weeks
fn month_weeks(cursor: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let first = cursor.with_day(1).unwrap_or(cursor);
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut slot = offset;
    for day in 1..=days_in_month(cursor.year(), cursor.month()) {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

fn days_in_month(year: i32, month: u32) -> u32 {
    // The day before the first of the next month
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(30)
}
