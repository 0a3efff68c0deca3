//! Reusable UI components styled through the theme palette

mod badge;
mod button;
mod checkbox;
mod combobox;
mod date_picker;
mod multi_select;
mod radio_group;
mod select;
mod spinner;
mod switch;
mod text_field;

pub use badge::{badge_span, dismissible_badge_span, BadgeVariant};
pub use button::{render_button, ButtonVariant, BUTTON_HEIGHT};
pub use checkbox::render_checkbox;
pub use combobox::{render_combo_overlay, render_combobox};
pub use date_picker::{render_calendar_overlay, render_date_picker};
pub use multi_select::{render_multi_overlay, render_multi_select};
pub use radio_group::render_radio_group;
pub use select::render_select;
pub use spinner::{spinner_frame, spinner_span};
pub use switch::render_switch;
pub use text_field::render_text_field;

use crate::form::FieldState;
use crate::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{List, ListState};
use ratatui::Frame;

/// Semantic color role shared by badges and buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Default,
    Primary,
    Warning,
    Destructive,
    Gray,
}

impl ColorRole {
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Default,
        ColorRole::Primary,
        ColorRole::Warning,
        ColorRole::Destructive,
        ColorRole::Gray,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::Gray => "gray",
        }
    }

    /// Base color and contrasting foreground for the role
    fn resolve(&self, palette: &Palette) -> (Color, Color) {
        match self {
            Self::Default => (palette.secondary, palette.secondary_foreground),
            Self::Primary => (palette.primary, palette.primary_foreground),
            Self::Warning => (palette.warning, palette.warning_foreground),
            Self::Destructive => (palette.destructive, palette.destructive_foreground),
            Self::Gray => (palette.muted, palette.muted_foreground),
        }
    }
}

/// Block title for a bound field, marking required ones
fn field_title(field: &FieldState) -> String {
    if field.is_required() {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    }
}

/// Border style for a bound input: a validation error wins over focus
fn input_border(field: &FieldState, palette: &Palette, active: bool) -> Style {
    if field.error.is_some() {
        Style::default().fg(palette.destructive)
    } else {
        palette.border_style(active)
    }
}

/// Render a list that keeps the highlighted item scrolled into view
fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, highlight: usize) {
    let mut list_state = ListState::default().with_selected(Some(highlight));
    frame.render_stateful_widget(list, area, &mut list_state);
}
