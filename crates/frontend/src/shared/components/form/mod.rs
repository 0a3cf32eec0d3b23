pub mod date_form_field;
pub mod field_props;
pub mod form_field;

pub use date_form_field::DateFormField;
pub use field_props::{use_form_field_props_resolver, FieldBinding, FieldChrome, ResolvedField};
pub use form_field::{FieldErrorText, FieldLabel, FormField};
