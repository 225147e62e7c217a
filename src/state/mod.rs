//! Application state module

mod app_state;
mod forms;
mod options;

pub use app_state::*;
pub use forms::*;
pub use options::*;
