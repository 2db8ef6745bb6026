//! CV submission form rendering

use super::field_renderer::{draw_error_line, draw_field, draw_readonly_field};
use crate::app::App;
use crate::state::{ErrorKey, Form, FormSlot};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the CV submission form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " CV Submission ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(1),             // Name error
            Constraint::Length(3),             // Email
            Constraint::Length(1),             // Email error
            Constraint::Length(3),             // Phone
            Constraint::Length(1),             // Phone error
            Constraint::Length(3),             // Timezone
            Constraint::Length(3),             // CV path
            Constraint::Length(1),             // Attached file
            Constraint::Length(1),             // CV error
            Constraint::Length(1),             // Form error
            Constraint::Length(1),             // Success message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let state = &app.state;
    let form = &state.form;

    // (field index, error key, layout row) for name, email, phone
    let text_fields = [(0, ErrorKey::Name, 0), (1, ErrorKey::Email, 2), (2, ErrorKey::Phone, 4)];
    for (index, key, row) in text_fields {
        if let Some(field) = form.get_field(index) {
            let error = state.errors.get(key);
            let is_active = form.active_field() == index;
            draw_field(frame, chunks[row], field, is_active, error.is_some());
            draw_error_line(frame, chunks[row + 1], error);
        }
    }

    draw_readonly_field(frame, chunks[6], "Timezone", &form.timezone);

    let cv_error = state.errors.get(ErrorKey::Cv);
    draw_field(
        frame,
        chunks[7],
        &form.cv_path,
        form.active_slot() == FormSlot::CvPath,
        state.errors.contains(ErrorKey::Cv),
    );
    draw_attachment_line(frame, chunks[8], app);
    draw_error_line(frame, chunks[9], cv_error);

    if let Some(message) = state.errors.get(ErrorKey::Form) {
        let line = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
            .alignment(Alignment::Center);
        frame.render_widget(line, chunks[10]);
    }

    if let Some(message) = &state.status.success_message {
        let line = Paragraph::new(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Green),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(line, chunks[11]);
    }

    render_submit_button(
        frame,
        chunks[12],
        form.is_submit_active(),
        state.status.in_progress,
        app.spinner_frame,
    );
}

/// Show which file is attached, or how to attach one
fn draw_attachment_line(frame: &mut Frame, area: Rect, app: &App) {
    let span = match &app.state.form.cv {
        Some(file) => Span::styled(
            format!(" Attached: {} ({})", file.file_name, file.display_size()),
            Style::default().fg(Color::Green),
        ),
        None => Span::styled(
            " Type a path and press Enter to attach",
            Style::default().fg(Color::DarkGray),
        ),
    };
    frame.render_widget(Paragraph::new(span), area);
}
