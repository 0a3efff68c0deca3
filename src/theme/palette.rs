//! Terminal palette resolved from a theme's hex colors

use super::colors::ThemeColors;
use ratatui::style::{Color, Modifier, Style};

/// Parse a `#rrggbb` hex string into a terminal color
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn hex_or_reset(hex: &str) -> Color {
    parse_hex(hex).unwrap_or(Color::Reset)
}

/// One mode's colors resolved for ratatui.
///
/// Malformed hex values fall back to `Color::Reset` rather than failing,
/// so a broken override never takes the whole UI down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub card: Color,
    pub card_foreground: Color,
    pub popover: Color,
    pub popover_foreground: Color,
    pub primary: Color,
    pub primary_foreground: Color,
    pub secondary: Color,
    pub secondary_foreground: Color,
    pub muted: Color,
    pub muted_foreground: Color,
    pub accent: Color,
    pub accent_foreground: Color,
    pub destructive: Color,
    pub destructive_foreground: Color,
    pub success: Color,
    pub success_foreground: Color,
    pub warning: Color,
    pub warning_foreground: Color,
    pub error: Color,
    pub error_foreground: Color,
    pub info: Color,
    pub info_foreground: Color,
    pub border: Color,
    pub input: Color,
    pub ring: Color,
}

impl Palette {
    pub fn from_colors(colors: &ThemeColors) -> Self {
        Self {
            background: hex_or_reset(&colors.background.base),
            foreground: hex_or_reset(&colors.foreground),
            card: hex_or_reset(&colors.card.base),
            card_foreground: hex_or_reset(&colors.card.foreground),
            popover: hex_or_reset(&colors.popover.base),
            popover_foreground: hex_or_reset(&colors.popover.foreground),
            primary: hex_or_reset(&colors.primary.base),
            primary_foreground: hex_or_reset(&colors.primary.foreground),
            secondary: hex_or_reset(&colors.secondary.base),
            secondary_foreground: hex_or_reset(&colors.secondary.foreground),
            muted: hex_or_reset(&colors.muted.base),
            muted_foreground: hex_or_reset(&colors.muted.foreground),
            accent: hex_or_reset(&colors.accent.base),
            accent_foreground: hex_or_reset(&colors.accent.foreground),
            destructive: hex_or_reset(&colors.destructive.base),
            destructive_foreground: hex_or_reset(&colors.destructive.foreground),
            success: hex_or_reset(&colors.success.base),
            success_foreground: hex_or_reset(&colors.success.foreground),
            warning: hex_or_reset(&colors.warning.base),
            warning_foreground: hex_or_reset(&colors.warning.foreground),
            error: hex_or_reset(&colors.error.base),
            error_foreground: hex_or_reset(&colors.error.foreground),
            info: hex_or_reset(&colors.info.base),
            info_foreground: hex_or_reset(&colors.info.foreground),
            border: hex_or_reset(&colors.border),
            input: hex_or_reset(&colors.input),
            ring: hex_or_reset(&colors.ring),
        }
    }

    /// Border style for an input or panel; focus swaps in the ring color
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.ring)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted_foreground)
    }

    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_hex_roundtrip() {
        assert_eq!(parse_hex("#0284c7"), Some(Color::Rgb(0x02, 0x84, 0xc7)));
        assert_eq!(parse_hex("#ffffff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert_eq!(parse_hex("0284c7"), None); // missing '#'
        assert_eq!(parse_hex("#fff"), None); // shorthand unsupported
        assert_eq!(parse_hex("#gggggg"), None);
        assert_eq!(parse_hex("#0284c70"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn test_malformed_hex_falls_back_to_reset() {
        let mut colors = ThemeConfig::default().light;
        colors.primary.base = "not-a-color".to_string();
        let palette = Palette::from_colors(&colors);
        assert_eq!(palette.primary, Color::Reset);
        // Other roles are unaffected
        assert_eq!(palette.border, Color::Rgb(0xe2, 0xe8, 0xf0));
    }

    #[test]
    fn test_border_style_swaps_ring_on_focus() {
        let palette = Palette::from_colors(&ThemeConfig::default().light);
        assert_eq!(palette.border_style(false).fg, Some(palette.border));
        assert_eq!(palette.border_style(true).fg, Some(palette.ring));
    }

    #[test]
    fn test_light_and_dark_resolve_differently() {
        let theme = ThemeConfig::default();
        let light = Palette::from_colors(&theme.light);
        let dark = Palette::from_colors(&theme.dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.primary, dark.primary);
    }
}
