//! Date and time comparisons

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone};

use crate::clock::Clock;
use crate::error::{Error, Result};

/// Tolerance used by callers that have no better value
pub const DEFAULT_RANGE_SECONDS: i64 = 10;

/// Whether range ends count as inside the range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bounds {
    /// Start and end are outside
    #[default]
    Exclusive,
    /// Start and end are inside
    Inclusive,
}

/// Is `current` strictly inside `expected ± seconds`?
///
/// A negative tolerance yields an empty window. Fails with
/// [`Error::OutOfRange`] when the window cannot be represented.
pub fn is_within_range_of<Tz: TimeZone>(
    current: &DateTime<Tz>,
    expected: &DateTime<Tz>,
    seconds: i64,
) -> Result<bool> {
    let overflow = || Error::out_of_range("seconds", seconds);
    let delta = TimeDelta::try_seconds(seconds).ok_or_else(overflow)?;
    let low = expected.clone().checked_sub_signed(delta).ok_or_else(overflow)?;
    let high = expected.clone().checked_add_signed(delta).ok_or_else(overflow)?;

    Ok(*current > low && *current < high)
}

/// Is `value` between `start` and `end`?
pub fn between<T: PartialOrd>(value: &T, start: &T, end: &T, bounds: Bounds) -> bool {
    match bounds {
        Bounds::Exclusive => value > start && value < end,
        Bounds::Inclusive => value >= start && value <= end,
    }
}

/// Whole years from `date_of_birth` to `assessment_date`
///
/// The year only counts once its anniversary has been reached, so a birth
/// date after the assessment date gives a negative age.
pub fn age(date_of_birth: NaiveDate, assessment_date: NaiveDate) -> i32 {
    let mut age = assessment_date.year() - date_of_birth.year();
    let anniversary = (date_of_birth.month(), date_of_birth.day());
    if (assessment_date.month(), assessment_date.day()) < anniversary {
        age -= 1;
    }
    age
}

/// [`age`] assessed on the clock's local date
pub fn age_today(date_of_birth: NaiveDate, clock: &impl Clock) -> i32 {
    age(date_of_birth, clock.now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Local, Utc};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 1, 1, h, m, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_within_default_range() {
        let expected = at(12, 30, 0);
        for current in [at(12, 30, 2), at(12, 30, 9), at(12, 29, 51)] {
            assert!(is_within_range_of(&current, &expected, DEFAULT_RANGE_SECONDS).unwrap());
        }
    }

    #[test]
    fn test_outside_default_range() {
        let expected = at(12, 30, 0);
        // the window is open at both ends
        for current in [at(12, 30, 10), at(12, 29, 50), at(12, 31, 0)] {
            assert!(!is_within_range_of(&current, &expected, DEFAULT_RANGE_SECONDS).unwrap());
        }
    }

    #[test]
    fn test_custom_range() {
        let expected = at(12, 30, 0);
        assert!(is_within_range_of(&at(12, 30, 15), &expected, 20).unwrap());
        assert!(!is_within_range_of(&at(12, 30, 25), &expected, 20).unwrap());
        assert!(!is_within_range_of(&expected, &expected, -5).unwrap());
    }

    #[test]
    fn test_range_overflow() {
        let expected = DateTime::<Utc>::MAX_UTC;
        let result = is_within_range_of(&expected, &expected, 10);
        assert!(matches!(result, Err(Error::OutOfRange { name: "seconds", .. })));

        let result = is_within_range_of(&at(0, 0, 0), &at(0, 0, 0), i64::MAX);
        assert!(result.is_err());
    }

    #[test]
    fn test_between() {
        let today = date(2024, 6, 15);
        let yesterday = date(2024, 6, 14);
        let tomorrow = date(2024, 6, 16);

        assert!(between(&today, &yesterday, &tomorrow, Bounds::Exclusive));
        assert!(between(&today, &yesterday, &tomorrow, Bounds::Inclusive));
        assert!(!between(&yesterday, &today, &tomorrow, Bounds::Inclusive));
        assert!(!between(&today, &today, &tomorrow, Bounds::default()));
        assert!(!between(&today, &today, &today, Bounds::Exclusive));
        assert!(between(&today, &today, &today, Bounds::Inclusive));
    }

    #[test]
    fn test_age() {
        let assessed = date(2024, 6, 15);
        assert_eq!(age(date(2014, 6, 16), assessed), 9);
        assert_eq!(age(date(2014, 6, 15), assessed), 10);
        assert_eq!(age(date(2014, 5, 30), assessed), 10);
        assert_eq!(age(date(2035, 6, 16), assessed), -12);
        assert_eq!(age(date(2034, 6, 15), assessed), -10);
    }

    #[test]
    fn test_age_leap_day() {
        let born = date(2000, 2, 29);
        assert_eq!(age(born, date(2023, 2, 28)), 22);
        assert_eq!(age(born, date(2023, 3, 1)), 23);
        assert_eq!(age(born, date(2024, 2, 29)), 24);
    }

    #[test]
    fn test_age_today() {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
        let today = clock.utc_now().with_timezone(&Local).date_naive();
        let born = today.with_year(today.year() - 30).unwrap();
        assert_eq!(age_today(born, &clock), 30);
    }
}
