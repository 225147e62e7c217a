//! Form rendering module
//!
//! - `field_renderer`: text inputs with inline errors
//! - `multi_select`: country/city pickers
//! - `registration_form`: the whole form

mod field_renderer;
mod multi_select;
mod registration_form;

pub use registration_form::draw as draw_registration_form;
