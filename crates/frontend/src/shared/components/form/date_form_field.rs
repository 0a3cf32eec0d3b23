use super::field_props::{use_form_field_props_resolver, FieldBinding, ResolvedField};
use super::form_field::FormField;
use crate::shared::clock::use_clock;
use crate::shared::components::date_input::DateInput;
use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::form_fields::{DateBoundsConfig, DatePickerPosition};
use leptos::prelude::*;

/// Border applied to the control while the field has an error.
pub const ERROR_BORDER_CLASS: &str = "border-red-500";

/// A form field to pick a date.
///
/// ```ignore
/// <DateFormField
///     field=form.field::<NaiveDate>("user_date_of_birth")
///         .with_label("Date of birth")
///         .required(true)
///     disable_future=true // same as max = now
/// />
/// ```
///
/// Bounds are derived from the clock in context on every read, so
/// `disable_future` / `disable_past` keep tracking the current time.
#[component]
pub fn DateFormField(
    field: FieldBinding<NaiveDate>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Explicit lower bound, wins over `disable_past`
    #[prop(optional, into)]
    min: MaybeProp<NaiveDateTime>,
    /// Explicit upper bound, wins over `disable_future`
    #[prop(optional, into)]
    max: MaybeProp<NaiveDateTime>,
    /// Popup position, RIGHT when omitted
    #[prop(optional, into)]
    position: MaybeProp<DatePickerPosition>,
    /// Upper bound defaults to now
    #[prop(optional)]
    disable_future: bool,
    /// Lower bound defaults to yesterday
    #[prop(optional)]
    disable_past: bool,
) -> impl IntoView {
    let field = use_form_field_props_resolver(field);
    let clock = use_clock();

    let bounds = Signal::derive(move || {
        DateBoundsConfig {
            min: min.get(),
            max: max.get(),
            disable_future,
            disable_past,
        }
        .resolve(clock.as_ref())
    });

    let field_id = field.id.clone();
    Effect::new(move |_| {
        let current = bounds.get();
        if current.is_inverted() {
            log::warn!(
                "Date field '{}' has min {:?} after max {:?}; no date can be picked",
                field_id,
                current.min,
                current.max
            );
        }
    });

    let error = field.error;
    let input_class = Signal::derive(move || error_border_class(error.get().as_deref()));
    let position = Signal::derive(move || Some(position.get().unwrap_or_default()));

    let chrome = field.chrome();
    let ResolvedField {
        id,
        value,
        handle_change,
        disabled,
        ..
    } = field;

    view! {
        <FormField field=chrome>
            <DateInput
                id=id
                class=input_class
                value=value
                on_change=handle_change
                disabled=disabled
                min=Signal::derive(move || bounds.get().min)
                max=Signal::derive(move || bounds.get().max)
                position=position
                placeholder=placeholder
            />
        </FormField>
    }
}

/// `error` is already normalized by the resolver, blank messages arrive as `None`.
fn error_border_class(error: Option<&str>) -> Option<String> {
    error.map(|_| ERROR_BORDER_CLASS.to_string())
}
