use super::field_props::FieldChrome;
use crate::shared::class_names::class_names;
use leptos::prelude::*;

/// Wraps a control with its label and validation error.
#[component]
pub fn FormField(
    /// Label and error chrome of the resolved field
    field: FieldChrome,
    /// The control itself
    children: Children,
) -> impl IntoView {
    let FieldChrome {
        id,
        label,
        required,
        error,
        class,
        label_class,
        error_class,
    } = field;
    let group_class = class_names([Some("form__group"), class.as_deref()]);

    view! {
        <div class=group_class>
            {label.map(|text| view! {
                <FieldLabel for_id=id text=text required=required class=label_class />
            })}
            {children()}
            <FieldErrorText error=error class=error_class />
        </div>
    }
}

/// Field label with an optional required marker
#[component]
pub fn FieldLabel(
    /// ID of the labelled control
    #[prop(into)]
    for_id: String,
    #[prop(into)]
    text: String,
    #[prop(optional)]
    required: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let label_class = move || class_names([Some("form__label"), class.get().as_deref()]);

    view! {
        <label class=label_class for=for_id>
            {text}
            {required.then(|| view! { <span class="form__required">"*"</span> })}
        </label>
    }
}

/// Renders the error message, or nothing while there is no error
#[component]
pub fn FieldErrorText(
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    move || {
        error.get().map(|message| {
            let error_class = class_names([Some("form__error"), class.get().as_deref()]);
            view! {
                <span class=error_class role="alert">
                    {message}
                </span>
            }
        })
    }
}
