//! UI module for rendering the TUI

pub mod components;

mod catalog;
mod gallery;
mod layout;
mod server_panel;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Tab bar on top, status bar on the bottom line
    let (tabs_area, content_area) = layout::create_layout(area);
    layout::draw_tab_bar(frame, tabs_area, app);

    // Draw main content based on current view
    match app.state.view {
        View::Form => gallery::draw_form(frame, content_area, app),
        View::Catalog => catalog::draw_catalog(frame, content_area, app),
        View::Server => server_panel::draw_server_panel(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);
}
