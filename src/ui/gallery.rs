//! Profile form view: every input widget bound to the shared form state

use super::components::{
    render_button, render_calendar_overlay, render_checkbox, render_combo_overlay, render_combobox,
    render_date_picker, render_multi_overlay, render_multi_select, render_radio_group,
    render_select, render_switch, render_text_field, ButtonVariant, ColorRole, BUTTON_HEIGHT,
};
use crate::app::App;
use crate::form::{Control, FieldState, FormState, FORM_BUTTONS};
use crate::state::Overlay;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the profile form: two columns of bound widgets inside a card,
/// action buttons at the bottom, overlays on top
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.state.palette();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(false))
        .title(" Profile ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let split = balance_point(&app.state.form);
    render_column(frame, columns[0], app, 0, split);
    render_column(frame, columns[1], app, split, app.state.form.fields.len());
    render_form_buttons(frame, rows[1], app);

    render_overlay(frame, inner, app);
}

fn render_column(frame: &mut Frame, area: Rect, app: &App, start: usize, end: usize) {
    let form = &app.state.form;
    let mut constraints: Vec<Constraint> = (start..end)
        .map(|i| Constraint::Length(field_height(&form.fields[i])))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, index) in (start..end).enumerate() {
        render_field(frame, chunks[slot], app, index);
    }
}

/// Render one bound field with its validation message underneath
fn render_field(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let state = &app.state;
    let palette = state.palette();
    let field = &state.form.fields[index];
    let active = state.form.active == index;

    // Last line is reserved for the validation message
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let options = state.option_set(&field.name).unwrap_or(&[]);
    match field.control {
        Control::Input => render_text_field(frame, chunks[0], field, &palette, active),
        Control::Select => render_select(frame, chunks[0], field, options, &palette, active),
        Control::Combobox => render_combobox(frame, chunks[0], field, options, &palette, active),
        Control::Radio => render_radio_group(frame, chunks[0], field, options, &palette, active),
        Control::MultiSelect => {
            render_multi_select(frame, chunks[0], field, options, &palette, active);
        }
        Control::Checkbox => render_checkbox(frame, chunks[0], field, &palette, active),
        Control::Switch => render_switch(frame, chunks[0], field, &palette, active),
        Control::DatePicker => render_date_picker(frame, chunks[0], field, &palette, active),
    }

    if let Some(error) = &field.error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {error}"), palette.error_text())),
            chunks[1],
        );
    }
}

fn render_form_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let palette = state.palette();
    let on_buttons = state.form.is_buttons_row_active();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Length(12),
        ])
        .split(area);

    for (idx, label) in FORM_BUTTONS.iter().enumerate() {
        let (variant, color) = if idx == 1 {
            (ButtonVariant::Solid, ColorRole::Primary)
        } else {
            (ButtonVariant::Outline, ColorRole::Default)
        };
        let selected = on_buttons && state.form.selected_button == idx;
        render_button(
            frame,
            chunks[1 + idx * 2],
            label,
            variant,
            color,
            &palette,
            selected,
            true,
        );
    }
}

fn render_overlay(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let palette = state.palette();
    match &state.overlay {
        Overlay::None => {}
        Overlay::Combo {
            query,
            results,
            highlight,
            loading,
        } => {
            let popup = centered(area, 44, 12);
            render_combo_overlay(
                frame, popup, query, results, *highlight, *loading, state.tick, &palette,
            );
        }
        Overlay::Multi { highlight } => {
            let Some(field) = state.form.active_field() else {
                return;
            };
            let options = state.option_set(&field.name).unwrap_or(&[]);
            let height = (options.len() as u16).saturating_add(2).min(12);
            let popup = centered(area, 36, height);
            render_multi_overlay(
                frame,
                popup,
                options,
                field.value.as_selection(),
                *highlight,
                &palette,
            );
        }
        Overlay::Calendar { cursor } => {
            let Some(field) = state.form.active_field() else {
                return;
            };
            let popup = centered(area, 26, 10);
            render_calendar_overlay(frame, popup, *cursor, field.value.as_date(), &palette);
        }
    }
}

/// Rows a field occupies: widget rows plus the validation message line
fn field_height(field: &FieldState) -> u16 {
    match field.control {
        Control::Input if field.multiline => 6,
        Control::Radio | Control::Checkbox | Control::Switch => 2,
        _ => 4,
    }
}

/// First field of the right column, chosen to balance column heights
fn balance_point(form: &FormState) -> usize {
    let total: u16 = form.fields.iter().map(field_height).sum();
    let mut acc = 0u16;
    for (i, field) in form.fields.iter().enumerate() {
        acc += field_height(field);
        if acc * 2 >= total {
            return i + 1;
        }
    }
    form.fields.len()
}

/// Center a fixed-size popup inside the given area
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
