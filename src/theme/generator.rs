//! Render a theme as a flat block of style variables

use super::colors::{ColorScale, ThemeColors, ThemeConfig};

fn push_scale(lines: &mut Vec<String>, key: &str, scale: &ColorScale) {
    lines.push(format!("{key} = \"{}\"", scale.base));
    lines.push(format!("{key}-foreground = \"{}\"", scale.foreground));
}

fn push_plain(lines: &mut Vec<String>, key: &str, value: &str) {
    lines.push(format!("{key} = \"{value}\""));
}

fn color_variables(colors: &ThemeColors) -> String {
    let mut lines = Vec::new();
    push_scale(&mut lines, "background", &colors.background);
    push_plain(&mut lines, "foreground", &colors.foreground);
    push_scale(&mut lines, "card", &colors.card);
    push_scale(&mut lines, "popover", &colors.popover);
    push_scale(&mut lines, "primary", &colors.primary);
    push_scale(&mut lines, "secondary", &colors.secondary);
    push_scale(&mut lines, "muted", &colors.muted);
    push_scale(&mut lines, "accent", &colors.accent);
    push_scale(&mut lines, "destructive", &colors.destructive);
    push_scale(&mut lines, "success", &colors.success);
    push_scale(&mut lines, "warning", &colors.warning);
    push_scale(&mut lines, "error", &colors.error);
    push_scale(&mut lines, "info", &colors.info);
    push_plain(&mut lines, "border", &colors.border);
    push_plain(&mut lines, "input", &colors.input);
    push_plain(&mut lines, "ring", &colors.ring);
    lines.join("\n")
}

/// Render both modes of a theme as `key = "#rrggbb"` lines under
/// `[light]` and `[dark]` headers. Scale roles emit a `-foreground`
/// companion line.
pub fn render_variables(theme: &ThemeConfig) -> String {
    format!(
        "[light]\n{}\n\n[dark]\n{}\n",
        color_variables(&theme.light),
        color_variables(&theme.dark)
    )
}
