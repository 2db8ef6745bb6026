//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `cv_form`: The CV submission form

mod cv_form;
mod field_renderer;

pub use cv_form::draw as draw_cv_form;
