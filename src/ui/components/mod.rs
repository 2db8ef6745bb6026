//! Reusable UI components

mod button;

pub use button::{render_submit_button, spinner_glyph, BUTTON_HEIGHT};
