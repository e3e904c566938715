// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar interval between two UTC instants.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::interval::Interval;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// An interval between two `chrono::DateTime<Utc>` bounds.
///
/// Bounds are stored as given; every operation projects onto the
/// numeric [`Interval`] core at millisecond precision, runs there, and
/// converts the results back. Equality compares the normalized numeric
/// projections, so bound order does not matter.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use spanset::DateInterval;
///
/// let booking = DateInterval::new(
///     Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
/// );
/// assert_eq!(booking.duration(), chrono::Duration::days(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DateInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateInterval {
    /// Creates a new calendar interval.
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        DateInterval { start, end }
    }

    /// Non-negative duration between the bounds.
    pub fn duration(&self) -> Duration {
        Duration::milliseconds(self.to_interval().length() as i64)
    }

    /// True iff `other` lies entirely within `self`, boundaries included.
    pub fn includes(&self, other: &Self) -> bool {
        self.to_interval().includes(&other.to_interval())
    }

    /// True iff the open overlap of the two intervals is non-empty.
    pub fn intersects(&self, other: &Self) -> bool {
        self.to_interval().intersects(&other.to_interval())
    }

    /// True iff one interval starts exactly where the other ends.
    pub fn touches(&self, other: &Self) -> bool {
        self.to_interval().touches(&other.to_interval())
    }

    /// Coalesces overlapping or touching calendar intervals.
    pub fn merge(intervals: &[DateInterval]) -> Vec<DateInterval> {
        Interval::merge(&Self::to_intervals(intervals))
            .into_iter()
            .map(Self::from_interval)
            .collect()
    }

    /// Clips the merged inputs to `range`, dropping zero-length results.
    pub fn limit(intervals: &[DateInterval], range: &DateInterval) -> Vec<DateInterval> {
        Interval::limit(&Self::to_intervals(intervals), &range.to_interval())
            .into_iter()
            .map(Self::from_interval)
            .collect()
    }

    /// The enclosing interval across the inputs; `None` when empty.
    pub fn span(intervals: &[DateInterval]) -> Option<DateInterval> {
        Interval::span(&Self::to_intervals(intervals)).map(Self::from_interval)
    }

    /// Finite holes between the inputs.
    pub fn gaps(intervals: &[DateInterval]) -> Vec<DateInterval> {
        Interval::gaps(&Self::to_intervals(intervals))
            .into_iter()
            .map(Self::from_interval)
            .collect()
    }

    /// Projection onto the numeric core: milliseconds since the Unix
    /// epoch. Normalizes swapped bounds.
    pub fn to_interval(&self) -> Interval {
        Interval::new(
            self.start.timestamp_millis() as f64,
            self.end.timestamp_millis() as f64,
        )
    }

    /// Rebuilds a calendar interval from a numeric core result.
    pub fn from_interval(interval: Interval) -> Self {
        DateInterval {
            start: Self::instant(interval.start()),
            end: Self::instant(interval.end()),
        }
    }

    fn instant(milliseconds: f64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(milliseconds as i64)
            .expect("interval bound out of chrono::DateTime<Utc> representable range")
    }

    fn to_intervals(intervals: &[DateInterval]) -> Vec<Interval> {
        intervals.iter().map(DateInterval::to_interval).collect()
    }
}

impl PartialEq for DateInterval {
    fn eq(&self, other: &Self) -> bool {
        self.to_interval() == other.to_interval()
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
impl Serialize for DateInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("DateInterval", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(DateInterval::new(raw.start, raw.end))
    }
}
