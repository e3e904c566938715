// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day interval within a single day.

use std::fmt;

use qtty::Seconds;

use crate::civil;
use crate::date_interval::DateInterval;
use crate::errors::ParseError;
use crate::interval::Interval;
use crate::time_of_day::TimeOfDay;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// An interval between two [`TimeOfDay`] bounds.
///
/// Conceptually bounded to one day; the type itself does not enforce
/// the bound on algebra results — only [`TimeInterval::inverse`] clips
/// to it. Every operation projects onto the numeric [`Interval`] core
/// via milliseconds since midnight. Equality compares the normalized
/// numeric projections.
///
/// # Examples
///
/// ```
/// use spanset::TimeInterval;
///
/// let shift = TimeInterval::parse("08:00", "12:00")?;
/// let free = TimeInterval::inverse(&[shift]);
/// assert_eq!(free[0].to_string(), "00:00 to 08:00");
/// assert_eq!(free[1].to_string(), "12:00 to 24:00");
/// # Ok::<(), spanset::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeInterval {
    /// The full day: `00:00`–`24:00`.
    pub const DAY: Self = TimeInterval {
        start: TimeOfDay::MIDNIGHT,
        end: TimeOfDay::END_OF_DAY,
    };

    /// Creates a new time interval.
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        TimeInterval { start, end }
    }

    /// Parses both bounds from `HH:MM` / `HH:MM:SS` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, ParseError> {
        Ok(TimeInterval::new(start.parse()?, end.parse()?))
    }

    /// Non-negative duration between the bounds.
    pub fn duration(&self) -> Seconds {
        Seconds::new(self.to_interval().length() / 1_000.0)
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

    /// Coalesces overlapping or touching time intervals.
    pub fn merge(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
        Interval::merge(&Self::to_intervals(intervals))
            .into_iter()
            .map(Self::from_interval)
            .collect()
    }

    /// Clips the merged inputs to `range`, dropping zero-length results.
    pub fn limit(intervals: &[TimeInterval], range: &TimeInterval) -> Vec<TimeInterval> {
        Interval::limit(&Self::to_intervals(intervals), &range.to_interval())
            .into_iter()
            .map(Self::from_interval)
            .collect()
    }

    /// The enclosing interval across the inputs; `None` when empty.
    pub fn span(intervals: &[TimeInterval]) -> Option<TimeInterval> {
        Interval::span(&Self::to_intervals(intervals)).map(Self::from_interval)
    }

    /// Finite holes between the inputs.
    pub fn gaps(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
        Interval::gaps(&Self::to_intervals(intervals))
            .into_iter()
            .map(Self::from_interval)
            .collect()
    }

    /// Complement within the day.
    ///
    /// Time of day has no meaning outside `00:00`–`24:00`, so the raw
    /// complement over the real line is clipped to the full-day range
    /// before converting back.
    pub fn inverse(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
        let complement = Interval::inverse(&Self::to_intervals(intervals));
        Interval::limit(&complement, &Self::DAY.to_interval())
            .into_iter()
            .map(Self::from_interval)
            .collect()
    }

    /// Anchors this range onto a calendar day (`YYYY-MM-DD`).
    ///
    /// A `24:00` bound lands on midnight of the following day.
    pub fn to_date_interval(&self, day: &str) -> Result<DateInterval, ParseError> {
        Ok(DateInterval::new(
            civil::date_at(day, Some(self.start))?,
            civil::date_at(day, Some(self.end))?,
        ))
    }

    /// Projection onto the numeric core: milliseconds since midnight.
    /// Normalizes swapped bounds.
    pub fn to_interval(&self) -> Interval {
        Interval::new(
            f64::from(self.start.milliseconds()),
            f64::from(self.end.milliseconds()),
        )
    }

    /// Rebuilds a time interval from a numeric core result.
    pub fn from_interval(interval: Interval) -> Self {
        TimeInterval::new(
            TimeOfDay::from_bound(interval.start()),
            TimeOfDay::from_bound(interval.end()),
        )
    }

    fn to_intervals(intervals: &[TimeInterval]) -> Vec<Interval> {
        intervals.iter().map(TimeInterval::to_interval).collect()
    }
}

impl PartialEq for TimeInterval {
    fn eq(&self, other: &Self) -> bool {
        self.to_interval() == other.to_interval()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("TimeInterval", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: TimeOfDay,
            end: TimeOfDay,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(TimeInterval::new(raw.start, raw.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ti(start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(start, end).expect("valid bounds")
    }

    #[test]
    fn test_duration() {
        assert_eq!(ti("08:00", "12:00").duration(), Seconds::new(14_400.0));
        // Swapped bounds normalize through the core.
        assert_eq!(ti("12:00", "08:00").duration(), Seconds::new(14_400.0));
    }

    #[test]
    fn test_equality_ignores_bound_order() {
        assert_eq!(ti("08:00", "12:00"), ti("12:00", "08:00"));
        assert_ne!(ti("08:00", "12:00"), ti("08:00", "13:00"));
    }

    #[test]
    fn test_relations_delegate_to_the_core() {
        assert!(ti("08:00", "18:00").includes(&ti("09:00", "10:00")));
        assert!(ti("08:00", "12:00").intersects(&ti("11:00", "14:00")));
        assert!(!ti("08:00", "12:00").intersects(&ti("12:00", "14:00")));
        assert!(ti("08:00", "12:00").touches(&ti("12:00", "14:00")));
    }

    #[test]
    fn test_merge_coalesces_adjacent_shifts() {
        let merged = TimeInterval::merge(&[
            ti("09:00", "12:00"),
            ti("12:00", "13:00"),
            ti("15:00", "16:00"),
        ]);
        assert_eq!(merged, vec![ti("09:00", "13:00"), ti("15:00", "16:00")]);
    }

    #[test]
    fn test_inverse_reports_free_time_within_the_day() {
        let free = TimeInterval::inverse(&[ti("08:00", "12:00")]);
        assert_eq!(free, vec![ti("00:00", "08:00"), ti("12:00", "24:00")]);
    }

    #[test]
    fn test_inverse_of_empty_is_the_whole_day() {
        assert_eq!(TimeInterval::inverse(&[]), vec![TimeInterval::DAY]);
    }

    #[test]
    fn test_inverse_of_the_whole_day_is_empty() {
        assert!(TimeInterval::inverse(&[TimeInterval::DAY]).is_empty());
    }

    #[test]
    fn test_inverse_drops_zero_length_edges() {
        // Busy from midnight: no gap before 00:00 survives the clip.
        let free = TimeInterval::inverse(&[ti("00:00", "06:00")]);
        assert_eq!(free, vec![ti("06:00", "24:00")]);
    }

    #[test]
    fn test_gaps_between_shifts() {
        let gaps = TimeInterval::gaps(&[ti("08:00", "10:00"), ti("12:00", "14:00")]);
        assert_eq!(gaps, vec![ti("10:00", "12:00")]);
    }

    #[test]
    fn test_limit_to_business_hours() {
        let clipped = TimeInterval::limit(
            &[ti("06:00", "10:00"), ti("16:00", "23:00")],
            &ti("09:00", "18:00"),
        );
        assert_eq!(clipped, vec![ti("09:00", "10:00"), ti("16:00", "18:00")]);
    }

    #[test]
    fn test_span_across_shifts() {
        let span = TimeInterval::span(&[ti("13:00", "14:00"), ti("08:00", "09:30")]).unwrap();
        assert_eq!(span, ti("08:00", "14:00"));
        assert_eq!(TimeInterval::span(&[]), None);
    }

    #[test]
    fn test_to_date_interval_anchors_onto_a_day() {
        let anchored = ti("22:00", "24:00").to_date_interval("2024-02-29").unwrap();
        assert_eq!(anchored.start.to_rfc3339(), "2024-02-29T22:00:00+00:00");
        assert_eq!(anchored.end.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn test_display() {
        assert_eq!(ti("08:00", "12:30").to_string(), "08:00 to 12:30");
    }
}
