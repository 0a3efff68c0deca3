//! Layout chrome (tab bar, status bar)

use crate::app::App;
use crate::state::{Overlay, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the frame into the tab bar and the content area, reserving the
/// bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the view tabs across the top
pub fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.palette();

    let mut spans = vec![];
    for (idx, view) in View::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", palette.muted_text()));
        }
        let style = if *view == app.state.view {
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            palette.muted_text()
        };
        spans.push(Span::styled(format!(" {} ", view.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    // Theme mode indicator on the right
    let mode = if app.state.dark_mode {
        " dark ^D:theme "
    } else {
        " light ^D:theme "
    };
    let mode_area = Rect {
        x: area.x + area.width.saturating_sub(mode.len() as u16),
        y: area.y,
        width: (mode.len() as u16).min(area.width),
        height: 1,
    };
    frame.render_widget(Paragraph::new(mode).style(palette.muted_text()), mode_area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let palette = app.state.palette();

    // Build status bar content
    let mut spans = vec![];

    // Server health indicator
    let health = if app.state.health.is_some() {
        Span::styled(" ● ", Style::default().fg(palette.success))
    } else {
        Span::styled(" ○ ", palette.muted_text())
    };
    spans.push(health);

    // Status message wins over the key hints
    match &app.state.status_message {
        Some(msg) => {
            let style = if app.state.status_is_error {
                palette.error_text()
            } else {
                Style::default().fg(palette.success)
            };
            spans.push(Span::styled(msg.clone(), style));
        }
        None => {
            let hints = get_view_hints(app);
            spans.push(Span::styled(hints, palette.muted_text()));
        }
    }

    // Quit hint on the right
    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.muted));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget = Paragraph::new(quit_hint)
        .style(Style::default().bg(palette.muted).fg(palette.muted_foreground));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current overlay or view
fn get_view_hints(app: &App) -> String {
    match &app.state.overlay {
        Overlay::Combo { .. } => "type:search  ↑/↓:move  Enter:pick  Esc:close".to_string(),
        Overlay::Multi { .. } => "↑/↓:move  Space:toggle  Enter:done".to_string(),
        Overlay::Calendar { .. } => {
            "←→↑↓:day/week  PgUp/PgDn:month  Enter:pick  Esc:close".to_string()
        }
        Overlay::None => match app.state.view {
            View::Form => "↑/↓:field  Enter:open/press  ^R:reveal  Tab:view".to_string(),
            View::Catalog => "j/k:scroll  Tab:view  q:quit".to_string(),
            View::Server => "l:login  o:logout  r:refresh  Tab:view  q:quit".to_string(),
        },
    }
}
