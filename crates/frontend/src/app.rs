use crate::shared::clock::provide_clock;
use crate::shared::components::DateFormField;
use crate::shared::date_utils::format_date;
use crate::shared::state::FormState;
use chrono::NaiveDate;
use contracts::shared::form_fields::{DatePickerPosition, SystemClock};
use leptos::prelude::*;

const DATE_OF_BIRTH: &str = "user_date_of_birth";
const APPOINTMENT: &str = "appointment_date";

#[component]
pub fn App() -> impl IntoView {
    // Date fields read "now" from this clock.
    provide_clock(SystemClock);

    let form = FormState::new();

    let date_of_birth = form
        .field::<NaiveDate>(DATE_OF_BIRTH)
        .with_label("Date of birth")
        .required(true);
    let appointment = form
        .field::<NaiveDate>(APPOINTMENT)
        .with_label("Appointment date");

    let on_validate = move |_| {
        if form.value::<NaiveDate>(DATE_OF_BIRTH).is_none() {
            form.set_error(DATE_OF_BIRTH, "Required");
        }
    };
    let on_reset = move |_| form.clear();

    let selected = move || {
        form.value::<NaiveDate>(DATE_OF_BIRTH)
            .map(format_date)
            .unwrap_or_else(|| "-".to_string())
    };
    let snapshot = move || serde_json::to_string_pretty(&form.snapshot()).unwrap_or_default();

    view! {
        <div class="details-container form-demo">
            <div class="details-form">
                <DateFormField
                    field=date_of_birth
                    placeholder="Pick a date"
                    disable_future=true
                />
                <DateFormField
                    field=appointment
                    position=DatePickerPosition::Left
                    disable_past=true
                />
            </div>
            <div class="details-actions">
                <button class="btn btn-primary" on:click=on_validate>"Validate"</button>
                <button class="btn btn-secondary" on:click=on_reset>"Reset"</button>
            </div>
            <p>"Date of birth: " {selected}</p>
            <pre>{snapshot}</pre>
        </div>
    }
}
