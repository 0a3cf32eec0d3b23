use crate::shared::components::form::FieldBinding;
use contracts::shared::form_fields::FieldChangeEvent;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// FormState holds the values and validation errors of one form.
/// Values are stored as JSON keyed by field name so fields of any
/// serializable type can share the store.
#[derive(Clone, Copy)]
pub struct FormState {
    values: RwSignal<HashMap<String, Value>>,
    errors: RwSignal<HashMap<String, String>>,
    disabled: RwSignal<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: RwSignal::new(HashMap::new()),
            errors: RwSignal::new(HashMap::new()),
            disabled: RwSignal::new(false),
        }
    }

    /// Current value of a field. A stored value of another type reads as `None`.
    pub fn value<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.values
            .with(|values| values.get(name).cloned())
            .and_then(|json| serde_json::from_value(json).ok())
    }

    /// Store a field value; `None` removes it.
    pub fn set_value<T: Serialize>(&self, name: &str, value: Option<T>) {
        let Some(value) = value else {
            self.values.update(|values| {
                values.remove(name);
            });
            return;
        };
        match serde_json::to_value(value) {
            Ok(json) => self.values.update(|values| {
                values.insert(name.to_string(), json);
            }),
            Err(e) => log::error!("Failed to store value of field '{}': {}", name, e),
        }
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.with(|errors| errors.get(name).cloned())
    }

    pub fn set_error(&self, name: &str, message: impl Into<String>) {
        let message = message.into();
        self.errors.update(|errors| {
            errors.insert(name.to_string(), message);
        });
    }

    pub fn clear_error(&self, name: &str) {
        self.errors.update(|errors| {
            errors.remove(name);
        });
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.get()
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.set(disabled);
    }

    /// All current values as a JSON object.
    pub fn snapshot(&self) -> Value {
        self.values.with(|values| {
            let map: Map<String, Value> = values
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect();
            Value::Object(map)
        })
    }

    /// Drop all values and errors.
    pub fn clear(&self) {
        self.values.update(|values| values.clear());
        self.errors.update(|errors| errors.clear());
    }

    /// Bind a field of this form. Changing the field stores the new value
    /// and clears the field's error.
    pub fn field<T>(&self, name: &str) -> FieldBinding<T>
    where
        T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    {
        let form = *self;

        let value_name = name.to_string();
        let value = Signal::derive(move || form.value::<T>(&value_name));

        let error_name = name.to_string();
        let error = Signal::derive(move || form.error(&error_name));

        let disabled = Signal::derive(move || form.is_disabled());

        let on_change = Callback::new(move |event: FieldChangeEvent<T>| {
            log::debug!("Field '{}' changed", event.name);
            form.clear_error(&event.name);
            form.set_value(&event.name, event.value);
        });

        FieldBinding::new(name, value, on_change)
            .disabled(disabled)
            .error(error)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
