//! Theme color definitions: role scales for light and dark mode

use serde::{Deserialize, Serialize};

/// A color role paired with the foreground drawn on top of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    pub base: String,
    pub foreground: String,
}

impl ColorScale {
    fn new(base: &str, foreground: &str) -> Self {
        Self {
            base: base.to_string(),
            foreground: foreground.to_string(),
        }
    }
}

/// All color roles for one mode. Hex strings, `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: ColorScale,
    pub foreground: String,
    pub card: ColorScale,
    pub popover: ColorScale,
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub muted: ColorScale,
    pub accent: ColorScale,
    pub destructive: ColorScale,
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
    pub info: ColorScale,
    pub border: String,
    pub input: String,
    pub ring: String,
}

/// A complete theme: light and dark color sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub light: ThemeColors,
    pub dark: ThemeColors,
}

/// Optional per-role overrides applied on top of a preset.
///
/// Primary and secondary adjust light mode only (dark variants usually need
/// a separate lightness pass); status colors apply to both modes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl ThemeConfig {
    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "default" | "blue" => Some(blue_theme()),
            "ocean" => Some(ocean_theme()),
            "forest" => Some(forest_theme()),
            _ => None,
        }
    }

    /// Names accepted by [`ThemeConfig::preset`]
    pub fn preset_names() -> &'static [&'static str] {
        &["default", "blue", "ocean", "forest"]
    }

    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        if let Some(primary) = &overrides.primary {
            self.light.primary.base = primary.clone();
        }
        if let Some(secondary) = &overrides.secondary {
            self.light.secondary.base = secondary.clone();
        }
        if let Some(success) = &overrides.success {
            self.light.success.base = success.clone();
            self.dark.success.base = success.clone();
        }
        if let Some(warning) = &overrides.warning {
            self.light.warning.base = warning.clone();
            self.dark.warning.base = warning.clone();
        }
        if let Some(error) = &overrides.error {
            self.light.error.base = error.clone();
            self.dark.error.base = error.clone();
        }
        self
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        blue_theme()
    }
}

/// Blue preset, the default (#0284c7 base)
fn blue_theme() -> ThemeConfig {
    ThemeConfig {
        light: ThemeColors {
            background: ColorScale::new("#ffffff", "#020617"),
            foreground: "#020617".to_string(),
            card: ColorScale::new("#ffffff", "#020617"),
            popover: ColorScale::new("#ffffff", "#020617"),
            primary: ColorScale::new("#0284c7", "#ffffff"),
            secondary: ColorScale::new("#e0f2fe", "#0c4a6e"),
            muted: ColorScale::new("#f1f5f9", "#64748b"),
            accent: ColorScale::new("#e0f2fe", "#0c4a6e"),
            destructive: ColorScale::new("#ef4444", "#f8fafc"),
            success: ColorScale::new("#10b981", "#ffffff"),
            warning: ColorScale::new("#f59e0b", "#ffffff"),
            error: ColorScale::new("#ef4444", "#ffffff"),
            info: ColorScale::new("#0284c7", "#ffffff"),
            border: "#e2e8f0".to_string(),
            input: "#e2e8f0".to_string(),
            ring: "#0284c7".to_string(),
        },
        dark: ThemeColors {
            background: ColorScale::new("#020617", "#f8fafc"),
            foreground: "#f8fafc".to_string(),
            card: ColorScale::new("#020617", "#f8fafc"),
            popover: ColorScale::new("#020617", "#f8fafc"),
            primary: ColorScale::new("#0ea5e9", "#020617"),
            secondary: ColorScale::new("#1e3038", "#f8fafc"),
            muted: ColorScale::new("#1e293b", "#94a3b8"),
            accent: ColorScale::new("#2d4753", "#f8fafc"),
            destructive: ColorScale::new("#7f1d1d", "#f8fafc"),
            success: ColorScale::new("#34d399", "#000000"),
            warning: ColorScale::new("#fbbf24", "#000000"),
            error: ColorScale::new("#f87171", "#ffffff"),
            info: ColorScale::new("#0ea5e9", "#020617"),
            border: "#1e293b".to_string(),
            input: "#1e293b".to_string(),
            ring: "#0ea5e9".to_string(),
        },
    }
}

/// Ocean preset: teal-leaning primary and secondary
fn ocean_theme() -> ThemeConfig {
    let mut theme = blue_theme();
    theme.light.primary = ColorScale::new("#0284c7", "#ffffff");
    theme.light.secondary = ColorScale::new("#5eb8c4", "#ffffff");
    theme.dark.primary = ColorScale::new("#0ea5e9", "#000000");
    theme.dark.secondary = ColorScale::new("#43a3b0", "#ffffff");
    theme
}

/// Forest preset: green primary, olive secondary
fn forest_theme() -> ThemeConfig {
    let mut theme = blue_theme();
    theme.light.primary = ColorScale::new("#16a34a", "#ffffff");
    theme.light.secondary = ColorScale::new("#84a83e", "#ffffff");
    theme.dark.primary = ColorScale::new("#22c55e", "#000000");
    theme.dark.secondary = ColorScale::new("#6c8a33", "#ffffff");
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_blue_preset() {
        assert_eq!(ThemeConfig::default(), ThemeConfig::preset("blue").unwrap());
        assert_eq!(
            ThemeConfig::preset("default").unwrap(),
            ThemeConfig::preset("blue").unwrap()
        );
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(ThemeConfig::preset("neon").is_none());
    }

    #[test]
    fn test_every_preset_name_resolves() {
        for name in ThemeConfig::preset_names() {
            assert!(ThemeConfig::preset(name).is_some(), "missing preset {name}");
        }
    }

    #[test]
    fn test_presets_differ_in_primary() {
        let blue = ThemeConfig::preset("blue").unwrap();
        let forest = ThemeConfig::preset("forest").unwrap();
        assert_ne!(blue.light.primary.base, forest.light.primary.base);
    }

    #[test]
    fn test_overrides_primary_touches_light_only() {
        let theme = ThemeConfig::default().with_overrides(&ThemeOverrides {
            primary: Some("#123456".to_string()),
            ..Default::default()
        });
        assert_eq!(theme.light.primary.base, "#123456");
        assert_eq!(theme.dark.primary.base, "#0ea5e9");
    }

    #[test]
    fn test_overrides_status_colors_touch_both_modes() {
        let theme = ThemeConfig::default().with_overrides(&ThemeOverrides {
            warning: Some("#aabbcc".to_string()),
            ..Default::default()
        });
        assert_eq!(theme.light.warning.base, "#aabbcc");
        assert_eq!(theme.dark.warning.base, "#aabbcc");
    }
}
