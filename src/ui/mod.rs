//! UI module for rendering the TUI
//!
//! The whole frame is recomputed from `App` state on every draw.

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    forms::draw_cv_form(frame, layout::centered_form_area(content_area), app);

    layout::draw_status_bar(frame, status_area, app);
}
