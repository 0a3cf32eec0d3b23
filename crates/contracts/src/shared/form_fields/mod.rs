//! Framework-free building blocks for form fields.
//!
//! Everything here is plain data plus pure functions so it can be shared by
//! the UI crate and tested natively.

pub mod clock;
pub mod date_bounds;
pub mod error;
pub mod field;
pub mod position;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_bounds::{yesterday, DateBoundsConfig, EffectiveDateBounds};
pub use error::DateValueError;
pub use field::FieldChangeEvent;
pub use position::DatePickerPosition;
