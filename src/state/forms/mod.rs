//! Form domain layer
//!
//! Type-safe form handling for the CV intake form.

mod cv_file;
mod field;
mod form_state;

pub use cv_file::CvFile;
pub use field::FormField;
pub use form_state::{CvForm, Form, FormSlot};
