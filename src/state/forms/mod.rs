//! Form domain layer
//!
//! Text fields, multi-select pickers, the validation schema and the
//! registration form that ties them together.

mod field;
mod form_state;
mod multi_select;
pub mod schema;

pub use field::FormField;
pub use form_state::{Form, FormFocus, RegistrationForm, Submission, ValidationErrors};
pub use multi_select::MultiSelect;
pub use schema::FieldError;
