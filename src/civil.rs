// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil date helpers.
//!
//! Conversions between calendar values and the crate's domain types:
//! an ISO `YYYY-MM-DD` day plus an optional [`TimeOfDay`] on one side,
//! a `chrono::DateTime<Utc>` on the other.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Timelike, Utc};

use crate::errors::ParseError;
use crate::time_of_day::TimeOfDay;

/// Builds a UTC date-time from an ISO `YYYY-MM-DD` day, anchored at
/// `time` (midnight when `None`).
///
/// `24:00` anchors to midnight of the following day.
///
/// # Examples
///
/// ```
/// use spanset::{date_at, TimeOfDay};
///
/// let opening = date_at("2024-03-01", Some("08:30".parse()?))?;
/// assert_eq!(opening.to_rfc3339(), "2024-03-01T08:30:00+00:00");
/// # Ok::<(), spanset::ParseError>(())
/// ```
pub fn date_at(day: &str, time: Option<TimeOfDay>) -> Result<DateTime<Utc>, ParseError> {
    let date: NaiveDate = day.parse()?;
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let offset = time.map_or(0, |t| t.milliseconds());
    Ok(midnight + Duration::milliseconds(i64::from(offset)))
}

/// Calendar day of a UTC date-time.
pub fn day_of(datetime: &DateTime<Utc>) -> NaiveDate {
    datetime.date_naive()
}

/// Time of day of a UTC date-time, truncated to whole milliseconds.
pub fn time_of(datetime: &DateTime<Utc>) -> TimeOfDay {
    let time = datetime.time();
    let milliseconds = time.num_seconds_from_midnight() * 1_000 + time.nanosecond() / 1_000_000;
    // chrono folds leap seconds into the nanosecond field; clamp to 24:00.
    TimeOfDay::from_milliseconds(milliseconds).unwrap_or(TimeOfDay::END_OF_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_at_midnight_by_default() {
        let datetime = date_at("2024-03-01", None).unwrap();
        assert_eq!(datetime, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_date_at_with_time() {
        let datetime = date_at("2024-03-01", Some("13:45:30".parse().unwrap())).unwrap();
        assert_eq!(
            datetime,
            Utc.with_ymd_and_hms(2024, 3, 1, 13, 45, 30).unwrap()
        );
    }

    #[test]
    fn test_date_at_end_of_day_rolls_over() {
        let datetime = date_at("2024-02-29", Some(TimeOfDay::END_OF_DAY)).unwrap();
        assert_eq!(datetime, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_date_at_rejects_malformed_days() {
        assert!(matches!(date_at("not-a-day", None), Err(ParseError::Date(_))));
        assert!(matches!(date_at("2024-13-01", None), Err(ParseError::Date(_))));
    }

    #[test]
    fn test_day_of_and_time_of() {
        let datetime = Utc.with_ymd_and_hms(2024, 3, 1, 13, 45, 30).unwrap();
        assert_eq!(day_of(&datetime).to_string(), "2024-03-01");
        assert_eq!(time_of(&datetime).to_string(), "13:45:30");
    }

    #[test]
    fn test_day_and_time_round_trip() {
        let datetime = date_at("2030-12-31", Some("23:59:59".parse().unwrap())).unwrap();
        let day = day_of(&datetime).to_string();
        let rebuilt = date_at(&day, Some(time_of(&datetime))).unwrap();
        assert_eq!(rebuilt, datetime);
    }
}
