use crate::shared::class_names::class_names;
use crate::shared::date_utils::{bound_to_input_value, parse_input_value, to_input_value};
use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::form_fields::{DatePickerPosition, EffectiveDateBounds};
use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays dates in the user's locale format; `value`, `min` and `max`
/// travel as yyyy-mm-dd.
#[component]
pub fn DateInput(
    /// Selected date, `None` when empty
    #[prop(into)]
    value: Signal<Option<NaiveDate>>,
    /// Called with the picked date, or `None` when the input is cleared.
    /// Dates outside `min`/`max` are not reported.
    on_change: Callback<Option<NaiveDate>>,
    #[prop(into)]
    disabled: Signal<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Earliest selectable date (by calendar day)
    #[prop(optional, into)]
    min: MaybeProp<NaiveDateTime>,
    /// Latest selectable date (by calendar day)
    #[prop(optional, into)]
    max: MaybeProp<NaiveDateTime>,
    /// Popup position, RIGHT by default
    #[prop(optional, into)]
    position: MaybeProp<DatePickerPosition>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let position = move || position.get().unwrap_or_default();
    let input_class = move || {
        let modifier = format!("date-input--{}", position().css_modifier());
        let extra = class.get();
        class_names([
            Some("form__input date-input"),
            Some(modifier.as_str()),
            extra.as_deref(),
        ])
    };

    view! {
        <input
            type="date"
            id=move || id.get()
            class=input_class
            data-position=move || position().as_str()
            placeholder=move || placeholder.get()
            min=move || min.get().map(bound_to_input_value)
            max=move || max.get().map(bound_to_input_value)
            disabled=move || disabled.get()
            prop:value=move || value.get().map(to_input_value).unwrap_or_default()
            on:input=move |ev| {
                let bounds = EffectiveDateBounds {
                    min: min.get_untracked(),
                    max: max.get_untracked(),
                };
                match classify_input(&event_target_value(&ev), &bounds) {
                    InputOutcome::Cleared => on_change.run(None),
                    InputOutcome::Picked(date) => on_change.run(Some(date)),
                    InputOutcome::OutOfBounds(date) => {
                        log::debug!("Date {} is outside {:?}, ignored", date, bounds);
                    }
                    InputOutcome::Invalid(raw) => {
                        log::debug!("Unparsable date input '{}', ignored", raw);
                    }
                }
            }
        />
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputOutcome {
    Cleared,
    Picked(NaiveDate),
    OutOfBounds(NaiveDate),
    Invalid(String),
}

fn classify_input(raw: &str, bounds: &EffectiveDateBounds) -> InputOutcome {
    match parse_input_value(raw) {
        Ok(None) => InputOutcome::Cleared,
        Ok(Some(date)) if bounds.contains(date) => InputOutcome::Picked(date),
        Ok(Some(date)) => InputOutcome::OutOfBounds(date),
        Err(_) => InputOutcome::Invalid(raw.to_string()),
    }
}
