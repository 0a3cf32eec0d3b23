pub mod date_input;
pub mod form;

pub use date_input::DateInput;
pub use form::{DateFormField, FormField};
