//! Application state module

mod app_state;
mod errors;
mod forms;

pub use app_state::*;
pub use errors::*;
pub use forms::*;
