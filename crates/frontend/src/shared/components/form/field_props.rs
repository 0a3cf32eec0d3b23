use contracts::shared::form_fields::FieldChangeEvent;
use leptos::prelude::*;

/// Everything a form hands to one of its fields.
///
/// Built by the form-state owner (see `FormState::field`) and refined with the
/// builder methods at the call site:
///
/// ```ignore
/// <DateFormField
///     field=form.field::<NaiveDate>("user_date_of_birth")
///         .with_label("Date of birth")
///         .required(true)
///     disable_future=true
/// />
/// ```
#[derive(Clone)]
pub struct FieldBinding<T: Send + Sync + 'static> {
    pub name: String,
    pub id: Option<String>,
    pub label: Option<String>,
    pub required: bool,
    pub disabled: Signal<bool>,
    pub value: Signal<Option<T>>,
    pub error: Signal<Option<String>>,
    pub on_change: Callback<FieldChangeEvent<T>>,
    /// Classes for the wrapper `div`
    pub class: Option<String>,
    pub label_class: Option<String>,
    pub error_class: Option<String>,
}

impl<T: Send + Sync + 'static> FieldBinding<T> {
    pub fn new(
        name: impl Into<String>,
        value: Signal<Option<T>>,
        on_change: Callback<FieldChangeEvent<T>>,
    ) -> Self {
        Self {
            name: name.into(),
            id: None,
            label: None,
            required: false,
            disabled: Signal::stored(false),
            value,
            error: Signal::stored(None),
            on_change,
            class: None,
            label_class: None,
            error_class: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: impl Into<Signal<bool>>) -> Self {
        self.disabled = disabled.into();
        self
    }

    pub fn error(mut self, error: impl Into<Signal<Option<String>>>) -> Self {
        self.error = error.into();
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_label_class(mut self, class: impl Into<String>) -> Self {
        self.label_class = Some(class.into());
        self
    }

    pub fn with_error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = Some(class.into());
        self
    }
}

/// A field binding with defaults applied, ready to wire into a control.
#[derive(Clone)]
pub struct ResolvedField<T: Send + Sync + 'static> {
    pub id: String,
    pub name: String,
    pub label: Option<String>,
    pub required: bool,
    pub disabled: Signal<bool>,
    pub value: Signal<Option<T>>,
    /// `None` when there is no error; blank messages count as no error.
    pub error: Signal<Option<String>>,
    /// Takes the bare value and reports it to the form tagged with the field name.
    pub handle_change: Callback<Option<T>>,
    pub class: Option<String>,
    pub label_class: Option<String>,
    pub error_class: Option<String>,
}

/// Label and error chrome of a field, independent of its value type.
#[derive(Clone)]
pub struct FieldChrome {
    pub id: String,
    pub label: Option<String>,
    pub required: bool,
    pub error: Signal<Option<String>>,
    pub class: Option<String>,
    pub label_class: Option<String>,
    pub error_class: Option<String>,
}

impl<T: Send + Sync + 'static> ResolvedField<T> {
    pub fn chrome(&self) -> FieldChrome {
        FieldChrome {
            id: self.id.clone(),
            label: self.label.clone(),
            required: self.required,
            error: self.error,
            class: self.class.clone(),
            label_class: self.label_class.clone(),
            error_class: self.error_class.clone(),
        }
    }
}

pub fn use_form_field_props_resolver<T: Send + Sync + 'static>(
    binding: FieldBinding<T>,
) -> ResolvedField<T> {
    let FieldBinding {
        name,
        id,
        label,
        required,
        disabled,
        value,
        error,
        on_change,
        class,
        label_class,
        error_class,
    } = binding;

    let id = id.unwrap_or_else(|| name.clone());
    let error = Signal::derive(move || normalize_error(error.get()));

    let change_name = name.clone();
    let handle_change = Callback::new(move |value: Option<T>| {
        on_change.run(FieldChangeEvent::new(change_name.clone(), value));
    });

    ResolvedField {
        id,
        name,
        label,
        required,
        disabled,
        value,
        error,
        handle_change,
        class,
        label_class,
        error_class,
    }
}

fn normalize_error(error: Option<String>) -> Option<String> {
    error.filter(|message| !message.trim().is_empty())
}
