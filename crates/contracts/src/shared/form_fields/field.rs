use serde::{Deserialize, Serialize};

/// Emitted by a field when the user changes its value.
///
/// `value` is `None` when the control was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChangeEvent<T> {
    pub name: String,
    pub value: Option<T>,
}

impl<T> FieldChangeEvent<T> {
    pub fn new(name: impl Into<String>, value: Option<T>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
