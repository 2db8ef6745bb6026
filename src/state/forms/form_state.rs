//! CV intake form state

use super::cv_file::CvFile;
use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Focusable slots of the CV form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    Name,
    Email,
    Phone,
    CvPath,
    Submit,
}

impl FormSlot {
    const ORDER: [FormSlot; 5] = [
        FormSlot::Name,
        FormSlot::Email,
        FormSlot::Phone,
        FormSlot::CvPath,
        FormSlot::Submit,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ORDER[index.min(Self::ORDER.len() - 1)]
    }

    /// Whether the slot accepts typed characters
    pub fn is_text_input(&self) -> bool {
        !matches!(self, FormSlot::Submit)
    }
}

/// The candidate's form: three text fields, the resolved timezone,
/// the attached CV and the path being typed to select one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    /// Read-only; filled from the platform, never typed
    pub timezone: String,
    pub cv: Option<CvFile>,
    pub cv_path: FormField,
    pub active_field_index: usize,
}

impl CvForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "Email"),
            phone: FormField::text("phone", "Phone"),
            timezone: String::new(),
            cv: None,
            cv_path: FormField::text("cv", "CV (PDF/DOCX)"),
            active_field_index: 0,
        }
    }

    pub fn with_timezone(timezone: impl Into<String>) -> Self {
        Self {
            timezone: timezone.into(),
            ..Self::new()
        }
    }

    pub fn active_slot(&self) -> FormSlot {
        FormSlot::from_index(self.active_field_index)
    }

    /// Returns true if the submit button is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_slot() == FormSlot::Submit
    }

    /// Mutable access to the text input behind the active slot
    pub fn active_input_mut(&mut self) -> Option<&mut FormField> {
        match self.active_slot() {
            FormSlot::Name => Some(&mut self.name),
            FormSlot::Email => Some(&mut self.email),
            FormSlot::Phone => Some(&mut self.phone),
            FormSlot::CvPath => Some(&mut self.cv_path),
            FormSlot::Submit => None,
        }
    }

    /// Empty every value, including the timezone and the attached file.
    /// Focus stays where it was.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.timezone.clear();
        self.cv = None;
        self.cv_path.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.as_text().is_empty()
            && self.email.as_text().is_empty()
            && self.phone.as_text().is_empty()
            && self.timezone.is_empty()
            && self.cv.is_none()
            && self.cv_path.as_text().is_empty()
    }
}

impl Default for CvForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for CvForm {
    fn field_count(&self) -> usize {
        5 // name, email, phone, cv path, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(4);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.cv_path),
            // Index 4 is the submit button, no FormField for it
            _ => None,
        }
    }
}
