//! Server panel: connection, health, and session status

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the server panel
pub fn draw_server_panel(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let palette = state.palette();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(false))
        .title(" Server ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = |text: &str| Span::styled(format!("{text:<10}"), palette.muted_text());

    let mut lines = vec![Line::from(vec![
        label("Address"),
        Span::styled(state.server_address.clone(), palette.text()),
    ])];

    lines.push(match &state.health {
        Some(health) => Line::from(vec![
            label("Health"),
            Span::styled("● ", Style::default().fg(palette.success)),
            Span::styled(health.status.clone(), palette.text()),
            Span::styled(
                format!("  {}", health.timestamp.to_rfc3339()),
                palette.muted_text(),
            ),
        ]),
        None => Line::from(vec![
            label("Health"),
            Span::styled("○ unreachable".to_string(), palette.muted_text()),
        ]),
    });

    lines.push(match &state.user {
        Some(user) => Line::from(vec![
            label("User"),
            Span::styled(user.name.clone(), palette.text()),
            Span::styled(format!("  (id {})", user.id), palette.muted_text()),
        ]),
        None => Line::from(vec![
            label("User"),
            Span::styled("signed out".to_string(), palette.muted_text()),
        ]),
    });

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "l logs in as the demo account, o signs out, r refreshes",
        palette.muted_text(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
