//! Theme system: color presets, terminal palettes, and variable rendering

mod colors;
mod generator;
mod palette;

pub use colors::{ColorScale, ThemeColors, ThemeConfig, ThemeOverrides};
pub use generator::render_variables;
pub use palette::{parse_hex, Palette};
