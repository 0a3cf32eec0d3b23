pub mod class_names;
pub mod clock;
pub mod components;
pub mod date_utils;
pub mod state;
