//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::FlowPhase;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, body_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_registration_form(frame, body_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Success dialog overlays the form
    if app.state.phase == FlowPhase::Submitted {
        components::render_success_dialog(frame);
    }
}
