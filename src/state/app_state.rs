//! Application state definitions

use super::errors::{ErrorKey, ErrorMap};
use super::forms::{CvFile, CvForm, Form, FormSlot};
use std::path::Path;

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    /// True only while the outbound request is in flight
    pub in_progress: bool,
    pub success_message: Option<String>,
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: CvForm,
    pub errors: ErrorMap,
    pub status: SubmissionStatus,
}

impl AppState {
    pub fn new(timezone: impl Into<String>) -> Self {
        Self {
            form: CvForm::with_timezone(timezone),
            ..Default::default()
        }
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Type a character into the active input
    pub fn form_input_char(&mut self, c: char) {
        let slot = self.form.active_slot();
        if let Some(field) = self.form.active_input_mut() {
            field.push_char(c);
            self.clear_error_for(slot);
        }
    }

    /// Remove the last character from the active input
    pub fn form_backspace(&mut self) {
        let slot = self.form.active_slot();
        if let Some(field) = self.form.active_input_mut() {
            field.pop_char();
            self.clear_error_for(slot);
        }
    }

    /// Replace the whole value of a text slot, as an edit
    #[cfg(test)]
    pub fn set_form_value(&mut self, slot: FormSlot, value: &str) {
        let field = match slot {
            FormSlot::Name => &mut self.form.name,
            FormSlot::Email => &mut self.form.email,
            FormSlot::Phone => &mut self.form.phone,
            FormSlot::CvPath => &mut self.form.cv_path,
            FormSlot::Submit => return,
        };
        field.set_text(value);
        self.clear_error_for(slot);
    }

    fn clear_error_for(&mut self, slot: FormSlot) {
        let key = match slot {
            FormSlot::Name => ErrorKey::Name,
            FormSlot::Email => ErrorKey::Email,
            FormSlot::Phone => ErrorKey::Phone,
            // Typing a path is not a file selection; the cv error stays
            // until a file is accepted.
            FormSlot::CvPath | FormSlot::Submit => return,
        };
        self.errors.clear(key);
    }

    /// Run the file-type gate on `path`. Returns true if the file was attached.
    pub fn select_cv(&mut self, path: &Path) -> bool {
        match CvFile::select(path) {
            Ok(file) => {
                tracing::debug!(file = %file.file_name, size = file.size_bytes, "CV attached");
                self.form.cv = Some(file);
                self.errors.clear(ErrorKey::Cv);
                true
            }
            Err(rejection) => {
                tracing::debug!(path = %path.display(), %rejection, "CV selection rejected");
                self.errors.set(ErrorKey::Cv, rejection.to_string());
                false
            }
        }
    }

    /// Select the file named by the CV path input. An empty input is ignored.
    /// The input is cleared once a file is attached.
    pub fn select_cv_from_input(&mut self) -> bool {
        let raw = self.form.cv_path.as_text().trim().to_string();
        if raw.is_empty() {
            return false;
        }
        let attached = self.select_cv(Path::new(&raw));
        if attached {
            self.form.cv_path.clear();
        }
        attached
    }
}
