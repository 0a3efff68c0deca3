//! Button component for TUI

use super::ColorRole;
use crate::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Button fill style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Solid,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [
        ButtonVariant::Solid,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    fn bordered(&self) -> bool {
        matches!(self, Self::Solid | Self::Outline)
    }
}

/// Render a button with the given variant and color role
#[allow(clippy::too_many_arguments)]
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    variant: ButtonVariant,
    color: ColorRole,
    palette: &Palette,
    selected: bool,
    enabled: bool,
) {
    let (base, contrast) = color.resolve(palette);

    let mut text_style = if !enabled {
        palette.muted_text()
    } else {
        match variant {
            ButtonVariant::Solid => Style::default().bg(base).fg(contrast),
            ButtonVariant::Outline | ButtonVariant::Ghost => Style::default().fg(base),
            ButtonVariant::Link => Style::default().fg(base).add_modifier(Modifier::UNDERLINED),
        }
    };
    if selected {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    // Selection always gets the focus ring, even on borderless variants
    if selected || variant.bordered() {
        let border_style = if selected {
            palette.border_style(true)
        } else if !enabled {
            Style::default().fg(palette.muted)
        } else {
            Style::default().fg(base)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        frame.render_widget(Paragraph::new(format!(" {label} ")).style(text_style).block(block), area);
    } else {
        // Borderless variants pad a blank line so the label sits level
        // with the middle row of bordered neighbours
        let lines = vec![Line::default(), Line::from(format!(" {label} "))];
        frame.render_widget(Paragraph::new(lines).style(text_style), area);
    }
}
