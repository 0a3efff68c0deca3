//! Loading spinner driven by the application tick

use crate::theme::Palette;
use ratatui::style::Style;
use ratatui::text::Span;

/// Braille animation frames
const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame glyph for the given tick
pub fn spinner_frame(tick: u64) -> &'static str {
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}

/// Styled spinner span
pub fn spinner_span(tick: u64, palette: &Palette) -> Span<'static> {
    Span::styled(spinner_frame(tick), Style::default().fg(palette.primary))
}
