//! Badge component for TUI

use super::ColorRole;
use crate::theme::Palette;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Badge fill style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Solid,
    Outline,
    Ghost,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 3] = [
        BadgeVariant::Solid,
        BadgeVariant::Outline,
        BadgeVariant::Ghost,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
            Self::Ghost => "ghost",
        }
    }
}

/// Build a styled badge span
pub fn badge_span(
    text: &str,
    variant: BadgeVariant,
    color: ColorRole,
    palette: &Palette,
) -> Span<'static> {
    let (base, contrast) = color.resolve(palette);
    match variant {
        BadgeVariant::Solid => {
            Span::styled(format!(" {text} "), Style::default().bg(base).fg(contrast))
        }
        BadgeVariant::Outline => Span::styled(format!("[{text}]"), Style::default().fg(base)),
        BadgeVariant::Ghost => Span::styled(
            format!(" {text} "),
            Style::default().fg(base).add_modifier(Modifier::DIM),
        ),
    }
}

/// Badge with a dismiss mark, used for committed multi-select values
pub fn dismissible_badge_span(text: &str, color: ColorRole, palette: &Palette) -> Span<'static> {
    let (base, contrast) = color.resolve(palette);
    Span::styled(format!(" {text} ✕ "), Style::default().bg(base).fg(contrast))
}
