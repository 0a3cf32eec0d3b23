//! Date conversions between chrono values and what date inputs exchange.

use chrono::{NaiveDate, NaiveDateTime};
use contracts::shared::form_fields::DateValueError;

/// Format used by `<input type="date">` for `value`, `min` and `max`.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Example: 2024-03-15 -> "2024-03-15"
pub fn to_input_value(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// A bound keeps its time of day, the input only sees the calendar date.
/// Example: 2024-06-15T10:00:00 -> "2024-06-15"
pub fn bound_to_input_value(bound: NaiveDateTime) -> String {
    to_input_value(bound.date())
}

/// Parse an input value; an empty string means the control was cleared.
pub fn parse_input_value(raw: &str) -> Result<Option<NaiveDate>, DateValueError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT)
        .map(Some)
        .map_err(|_| DateValueError::InvalidFormat {
            input: raw.to_string(),
        })
}

/// Display format, DD.MM.YYYY.
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
