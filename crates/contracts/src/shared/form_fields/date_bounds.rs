use super::clock::Clock;
use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Bounds as configured on a date field.
///
/// An explicit `min`/`max` always wins over the matching shortcut flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBoundsConfig {
    pub min: Option<NaiveDateTime>,
    pub max: Option<NaiveDateTime>,
    /// Equivalent to `max = now`.
    pub disable_future: bool,
    /// Equivalent to `min = now - 1 day`.
    pub disable_past: bool,
}

/// Bounds actually handed to the date widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveDateBounds {
    pub min: Option<NaiveDateTime>,
    pub max: Option<NaiveDateTime>,
}

impl DateBoundsConfig {
    pub fn resolve(&self, clock: &dyn Clock) -> EffectiveDateBounds {
        let max = match self.max {
            Some(max) => Some(max),
            None if self.disable_future => Some(clock.now()),
            None => None,
        };
        let min = match self.min {
            Some(min) => Some(min),
            None if self.disable_past => Some(yesterday(clock)),
            None => None,
        };
        EffectiveDateBounds { min, max }
    }
}

impl EffectiveDateBounds {
    /// Both bounds set and `min` on a later day than `max`. Such a field
    /// accepts no date. Compared by day, like `contains`.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min.date() > max.date())
    }

    /// Whether a calendar date falls inside the bounds, compared by day.
    pub fn contains(&self, date: NaiveDate) -> bool {
        let after_min = self.min.map_or(true, |min| date >= min.date());
        let before_max = self.max.map_or(true, |max| date <= max.date());
        after_min && before_max
    }
}

/// Current local time shifted back by one calendar day, time of day kept.
pub fn yesterday(clock: &dyn Clock) -> NaiveDateTime {
    let now = clock.now();
    now.checked_sub_days(Days::new(1)).unwrap_or(NaiveDateTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form_fields::clock::FixedClock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock::new(at(2024, 6, 15, 10, 0))
    }

    /// Counts reads so tests can tell whether the shortcut was evaluated.
    struct CountingClock {
        now: NaiveDateTime,
        reads: AtomicUsize,
    }

    impl Clock for CountingClock {
        fn now(&self) -> NaiveDateTime {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.now
        }
    }

    #[test]
    fn disable_future_sets_max_to_now() {
        let config = DateBoundsConfig {
            disable_future: true,
            ..Default::default()
        };
        let bounds = config.resolve(&clock());
        assert_eq!(bounds.max, Some(at(2024, 6, 15, 10, 0)));
        assert_eq!(bounds.min, None);
    }

    #[test]
    fn disable_past_sets_min_to_yesterday() {
        let config = DateBoundsConfig {
            disable_past: true,
            ..Default::default()
        };
        let bounds = config.resolve(&clock());
        assert_eq!(bounds.min, Some(at(2024, 6, 14, 10, 0)));
        assert_eq!(bounds.max, None);
    }

    #[test]
    fn explicit_bounds_win_over_shortcuts() {
        let config = DateBoundsConfig {
            min: Some(at(2024, 1, 1, 0, 0)),
            max: Some(at(2030, 12, 31, 0, 0)),
            disable_future: true,
            disable_past: true,
        };
        let counting = CountingClock {
            now: at(2024, 6, 15, 10, 0),
            reads: Default::default(),
        };
        let bounds = config.resolve(&counting);
        assert_eq!(bounds.min, Some(at(2024, 1, 1, 0, 0)));
        assert_eq!(bounds.max, Some(at(2030, 12, 31, 0, 0)));
        assert_eq!(counting.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn no_config_means_no_bounds() {
        let bounds = DateBoundsConfig::default().resolve(&clock());
        assert_eq!(bounds, EffectiveDateBounds::default());
        assert!(bounds.contains(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()));
    }

    #[test]
    fn yesterday_rolls_over_month_and_year() {
        let new_year = FixedClock::new(at(2024, 1, 1, 8, 30));
        assert_eq!(yesterday(&new_year), at(2023, 12, 31, 8, 30));

        let leap = FixedClock::new(at(2024, 3, 1, 23, 59));
        assert_eq!(yesterday(&leap), at(2024, 2, 29, 23, 59));
    }

    #[test]
    fn bounds_follow_the_clock_between_resolutions() {
        let config = DateBoundsConfig {
            disable_future: true,
            ..Default::default()
        };
        let first = config.resolve(&FixedClock::new(at(2024, 6, 15, 10, 0)));
        let second = config.resolve(&FixedClock::new(at(2024, 6, 16, 9, 0)));
        assert_eq!(first.max, Some(at(2024, 6, 15, 10, 0)));
        assert_eq!(second.max, Some(at(2024, 6, 16, 9, 0)));
    }

    #[test]
    fn inverted_bounds_are_detected() {
        let inverted = EffectiveDateBounds {
            min: Some(at(2024, 6, 20, 0, 0)),
            max: Some(at(2024, 6, 10, 0, 0)),
        };
        assert!(inverted.is_inverted());
        assert!(!inverted.contains(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));

        let one_sided = EffectiveDateBounds {
            min: Some(at(2024, 6, 20, 0, 0)),
            max: None,
        };
        assert!(!one_sided.is_inverted());
    }

    #[test]
    fn same_day_bounds_are_not_inverted() {
        // min at noon, max at 10:00 on the same day still admits that day
        let bounds = EffectiveDateBounds {
            min: Some(at(2024, 6, 15, 12, 0)),
            max: Some(at(2024, 6, 15, 10, 0)),
        };
        assert!(!bounds.is_inverted());
        assert!(bounds.contains(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(!bounds.contains(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()));

        let next_day = EffectiveDateBounds {
            min: Some(at(2024, 6, 16, 0, 0)),
            max: Some(at(2024, 6, 15, 23, 59)),
        };
        assert!(next_day.is_inverted());
        assert!(!next_day.contains(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(!next_day.contains(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()));
    }

    #[test]
    fn contains_compares_calendar_days() {
        let bounds = EffectiveDateBounds {
            min: Some(at(2024, 6, 14, 10, 0)),
            max: Some(at(2024, 6, 15, 10, 0)),
        };
        assert!(bounds.contains(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()));
        assert!(bounds.contains(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
        assert!(!bounds.contains(NaiveDate::from_ymd_opt(2024, 6, 13).unwrap()));
        assert!(!bounds.contains(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()));
    }
}
