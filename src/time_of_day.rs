// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day instant.
//!
//! [`TimeOfDay`] stores whole milliseconds since midnight and carries
//! the lexical `HH:MM` / `HH:MM:SS` form used by [`TimeInterval`]:
//! strict parsing via [`FromStr`], zero-padded formatting via
//! [`Display`](std::fmt::Display). `"24:00"` is accepted as the
//! end-of-day bound, one past the last valid instant of the day.
//!
//! [`TimeInterval`]: crate::TimeInterval

use std::fmt;
use std::str::FromStr;

use qtty::Seconds;

use crate::errors::ParseError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const MS_PER_SECOND: u32 = 1_000;
const MS_PER_MINUTE: u32 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u32 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: u32 = 24 * MS_PER_HOUR;

/// An instant within a single day, at millisecond precision.
///
/// Ordered, `Copy`, and hashable; the valid range is
/// `00:00` ..= `24:00` (0 ..= 86 400 000 ms).
///
/// # Examples
///
/// ```
/// use spanset::TimeOfDay;
///
/// let noon: TimeOfDay = "12:00".parse()?;
/// assert_eq!(noon.milliseconds(), 43_200_000);
/// assert_eq!(noon.to_string(), "12:00");
/// # Ok::<(), spanset::ParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// `00:00`.
    pub const MIDNIGHT: Self = TimeOfDay(0);

    /// `24:00` — one past the last valid instant of the day.
    pub const END_OF_DAY: Self = TimeOfDay(MS_PER_DAY);

    /// Builds from whole milliseconds since midnight.
    ///
    /// Returns `None` past `24:00`.
    pub fn from_milliseconds(milliseconds: u32) -> Option<Self> {
        (milliseconds <= MS_PER_DAY).then_some(TimeOfDay(milliseconds))
    }

    /// Milliseconds since midnight.
    #[inline]
    pub const fn milliseconds(&self) -> u32 {
        self.0
    }

    /// Offset from midnight as a typed quantity.
    #[inline]
    pub fn seconds(&self) -> Seconds {
        Seconds::new(f64::from(self.0) / 1_000.0)
    }

    /// Rebuilds a bound coming back from the numeric core.
    ///
    /// The algebra only ever shrinks or joins its inputs, so bounds
    /// derived from valid times stay within the day.
    pub(crate) fn from_bound(milliseconds: f64) -> Self {
        debug_assert!((0.0..=f64::from(MS_PER_DAY)).contains(&milliseconds));
        TimeOfDay(milliseconds as u32)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        let (hours, minutes, seconds) = match fields.as_slice() {
            [h, m] => (h.parse::<u32>()?, m.parse::<u32>()?, 0u32),
            [h, m, sec] => (h.parse::<u32>()?, m.parse::<u32>()?, sec.parse::<u32>()?),
            _ => return Err(ParseError::InvalidTime(s.to_owned())),
        };

        if minutes >= 60 || seconds >= 60 || hours > 24u32 {
            return Err(ParseError::TimeOutOfRange(s.to_owned()));
        }
        let milliseconds =
            hours * MS_PER_HOUR + minutes * MS_PER_MINUTE + seconds * MS_PER_SECOND;
        if milliseconds > MS_PER_DAY {
            return Err(ParseError::TimeOutOfRange(s.to_owned()));
        }
        Ok(TimeOfDay(milliseconds))
    }
}

impl fmt::Display for TimeOfDay {
    /// Formats as `HH:MM`, or `HH:MM:SS` when seconds are non-zero.
    ///
    /// Formatting round-trips exactly through parsing for every value
    /// representing whole seconds; sub-second precision is not
    /// rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_seconds = self.0 / MS_PER_SECOND;
        let hours = total_seconds / 3_600;
        let minutes = total_seconds / 60 % 60;
        let seconds = total_seconds % 60;
        if seconds == 0 {
            write!(f, "{hours:02}:{minutes:02}")
        } else {
            write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> TimeOfDay {
        s.parse().expect(s)
    }

    #[test]
    fn test_parse_hours_minutes() {
        assert_eq!(parse("08:30").milliseconds(), 8 * 3_600_000 + 30 * 60_000);
        assert_eq!(parse("00:00"), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn test_parse_hours_minutes_seconds() {
        assert_eq!(
            parse("07:05:09").milliseconds(),
            7 * 3_600_000 + 5 * 60_000 + 9 * 1_000
        );
    }

    #[test]
    fn test_parse_end_of_day() {
        assert_eq!(parse("24:00"), TimeOfDay::END_OF_DAY);
        assert_eq!(parse("24:00:00"), TimeOfDay::END_OF_DAY);
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        assert!(matches!("8".parse::<TimeOfDay>(), Err(ParseError::InvalidTime(_))));
        assert!(matches!(
            "1:2:3:4".parse::<TimeOfDay>(),
            Err(ParseError::InvalidTime(_))
        ));
        assert!(matches!("".parse::<TimeOfDay>(), Err(ParseError::InvalidTime(_))));
    }

    #[test]
    fn test_parse_rejects_non_numeric_components() {
        assert!(matches!(
            "ab:00".parse::<TimeOfDay>(),
            Err(ParseError::Component(_))
        ));
        assert!(matches!(
            "08:".parse::<TimeOfDay>(),
            Err(ParseError::Component(_))
        ));
        assert!(matches!(
            "-1:00".parse::<TimeOfDay>(),
            Err(ParseError::Component(_))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_components() {
        assert!(matches!(
            "08:60".parse::<TimeOfDay>(),
            Err(ParseError::TimeOutOfRange(_))
        ));
        assert!(matches!(
            "12:00:60".parse::<TimeOfDay>(),
            Err(ParseError::TimeOutOfRange(_))
        ));
        assert!(matches!(
            "25:00".parse::<TimeOfDay>(),
            Err(ParseError::TimeOutOfRange(_))
        ));
        assert!(matches!(
            "24:00:01".parse::<TimeOfDay>(),
            Err(ParseError::TimeOutOfRange(_))
        ));
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(parse("08:05").to_string(), "08:05");
        assert_eq!(parse("08:05:07").to_string(), "08:05:07");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00");
        assert_eq!(TimeOfDay::END_OF_DAY.to_string(), "24:00");
    }

    #[test]
    fn test_whole_second_values_round_trip() {
        for input in ["00:00", "00:00:01", "09:59:59", "12:34:56", "23:59", "24:00"] {
            let time = parse(input);
            assert_eq!(parse(&time.to_string()), time, "round-trip of {input}");
        }
    }

    #[test]
    fn test_from_milliseconds_bounds() {
        assert_eq!(TimeOfDay::from_milliseconds(0), Some(TimeOfDay::MIDNIGHT));
        assert_eq!(
            TimeOfDay::from_milliseconds(MS_PER_DAY),
            Some(TimeOfDay::END_OF_DAY)
        );
        assert_eq!(TimeOfDay::from_milliseconds(MS_PER_DAY + 1), None);
    }

    #[test]
    fn test_ordering() {
        assert!(parse("08:00") < parse("08:00:01"));
        assert!(parse("23:59:59") < TimeOfDay::END_OF_DAY);
    }

    #[test]
    fn test_seconds_quantity() {
        assert_eq!(parse("00:01").seconds(), Seconds::new(60.0));
    }
}
