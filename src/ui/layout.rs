//! Layout components (form area, status bar)

use super::components::spinner_glyph;
use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FormSlot;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form is drawn, in columns
const MAX_FORM_WIDTH: u16 = 72;

/// Split the screen into (content, status bar)
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center the form horizontally, capped at `MAX_FORM_WIDTH`
pub fn centered_form_area(area: Rect) -> Rect {
    let [form] = Layout::horizontal([Constraint::Max(MAX_FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    form
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.is_submitting() {
        spans.push(Span::styled(
            format!(" {} submitting ", spinner_glyph(app.spinner_frame)),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::raw(" "));
    }

    let hints = get_hints(app.state.form.active_slot());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused slot
fn get_hints(slot: FormSlot) -> String {
    let enter = match slot {
        FormSlot::CvPath => "Enter:attach",
        FormSlot::Submit => "Enter:submit",
        _ => "Enter:next",
    };
    format!("Tab:next  {enter}  {SUBMIT_SHORTCUT}:submit  {QUIT_SHORTCUT}:quit")
}
