pub mod form_fields;
