// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Numeric interval core.
//!
//! [`Interval`] is a normalized range over `f64` bounds together with
//! the collection algorithms the domain wrappers delegate to:
//! [`Interval::merge`], [`Interval::inverse`], [`Interval::limit`],
//! [`Interval::gaps`] and [`Interval::span`].
//!
//! Bounds may be infinite, which is how unbounded ranges and the
//! complement of an empty set are represented. The algorithms never
//! mutate their input slices; sorting happens on a private copy.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// A normalized numeric range with `start <= end`.
///
/// The constructor swaps out-of-order bounds, so an `Interval` can
/// never carry a direction — only a range. Overlap is strict: two
/// intervals that share a single endpoint [`touches`] but do not
/// [`intersects`].
///
/// # Examples
///
/// ```
/// use spanset::Interval;
///
/// let interval = Interval::new(5.0, 0.0);
/// assert_eq!(interval.start(), 0.0);
/// assert_eq!(interval.end(), 5.0);
/// assert_eq!(interval.length(), 5.0);
/// ```
///
/// [`touches`]: Interval::touches
/// [`intersects`]: Interval::intersects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// The whole real line.
    pub const FULL: Self = Interval {
        start: f64::NEG_INFINITY,
        end: f64::INFINITY,
    };

    /// Creates a new interval, swapping the bounds if `start > end`.
    pub fn new(start: f64, end: f64) -> Self {
        if start > end {
            Interval { start: end, end: start }
        } else {
            Interval { start, end }
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// Lower bound.
    #[inline]
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound.
    #[inline]
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// `end - start`; never negative for normalized bounds.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// True iff neither bound is infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    // ── relations ─────────────────────────────────────────────────────

    /// True iff `other` lies entirely within `self`, boundaries included.
    pub fn includes(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// True iff the open overlap of the two intervals is non-empty.
    ///
    /// Sharing a single endpoint is not an intersection; see
    /// [`Interval::touches`].
    pub fn intersects(&self, other: &Self) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// True iff one interval starts exactly where the other ends.
    pub fn touches(&self, other: &Self) -> bool {
        other.start == self.end || other.end == self.start
    }

    // ── collection algorithms ─────────────────────────────────────────

    /// Coalesces overlapping or touching intervals into the minimal
    /// disjoint cover, ordered ascending by start.
    ///
    /// Duplicates, zero-length and unbounded intervals are all valid
    /// input. The input slice is left untouched; sorting happens on a
    /// copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanset::Interval;
    ///
    /// let merged = Interval::merge(&[
    ///     Interval::new(0.0, 5.0),
    ///     Interval::new(5.0, 10.0),
    /// ]);
    /// assert_eq!(merged, vec![Interval::new(0.0, 10.0)]);
    /// ```
    pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
        let mut sorted = intervals.to_vec();
        sorted.sort_by(|a, b| a.start.total_cmp(&b.start));

        // Sweep in ascending start order: once an interval no longer
        // reaches the top of the stack, nothing later can either.
        let mut stack: Vec<Interval> = Vec::with_capacity(sorted.len());
        for interval in sorted {
            if let Some(top) = stack.last().copied() {
                if interval.intersects(&top) || interval.touches(&top) {
                    stack.pop();
                    stack.push(Interval::new(
                        top.start.min(interval.start),
                        top.end.max(interval.end),
                    ));
                    continue;
                }
            }
            stack.push(interval);
        }
        stack
    }

    /// Complement of the inputs over the real line.
    ///
    /// The inputs are merged first, so touching intervals produce no
    /// internal zero-length gap. An empty input yields the whole real
    /// line; finite outermost bounds yield unbounded leading/trailing
    /// gaps.
    pub fn inverse(intervals: &[Interval]) -> Vec<Interval> {
        let merged = Self::merge(intervals);
        let (first, last) = match (merged.first(), merged.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return vec![Self::FULL],
        };

        let mut result = Vec::new();
        if first.start.is_finite() {
            result.push(Interval::new(f64::NEG_INFINITY, first.start));
        }
        for pair in merged.windows(2) {
            result.push(Interval::new(pair[0].end, pair[1].start));
        }
        if last.end.is_finite() {
            result.push(Interval::new(last.end, f64::INFINITY));
        }
        result
    }

    /// Clips the merged inputs to `range`, dropping anything outside it
    /// and any result that degenerates to a single point.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanset::Interval;
    ///
    /// let clipped = Interval::limit(
    ///     &[Interval::new(-5.0, 15.0)],
    ///     &Interval::new(0.0, 10.0),
    /// );
    /// assert_eq!(clipped, vec![Interval::new(0.0, 10.0)]);
    /// ```
    pub fn limit(intervals: &[Interval], range: &Interval) -> Vec<Interval> {
        Self::merge(intervals)
            .into_iter()
            .filter(|interval| range.intersects(interval))
            .map(|interval| {
                if range.includes(&interval) {
                    interval
                } else {
                    Interval::new(
                        interval.start.max(range.start),
                        interval.end.min(range.end),
                    )
                }
            })
            .filter(|interval| interval.length() > 0.0)
            .collect()
    }

    /// Finite holes between the inputs: [`Interval::inverse`] without
    /// the unbounded leading and trailing complements.
    ///
    /// # Examples
    ///
    /// ```
    /// use spanset::Interval;
    ///
    /// let gaps = Interval::gaps(&[
    ///     Interval::new(0.0, 3.0),
    ///     Interval::new(5.0, 8.0),
    /// ]);
    /// assert_eq!(gaps, vec![Interval::new(3.0, 5.0)]);
    /// ```
    pub fn gaps(intervals: &[Interval]) -> Vec<Interval> {
        Self::inverse(intervals)
            .into_iter()
            .filter(|interval| interval.is_finite())
            .collect()
    }

    /// The enclosing interval from the minimum start to the maximum end
    /// across the inputs, ignoring any gaps between them.
    ///
    /// Returns `None` for an empty input.
    pub fn span(intervals: &[Interval]) -> Option<Interval> {
        let first = intervals.first()?;
        let (mut start, mut end) = (first.start, first.end);
        for interval in intervals {
            start = start.min(interval.start);
            end = end.max(interval.end);
        }
        Some(Interval::new(start, end))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

// Serde uses named bounds; deserialization re-normalizes through the
// constructor so swapped bounds cannot enter via data files.
#[cfg(feature = "serde")]
impl Serialize for Interval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Interval", 2)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Interval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start: f64,
            end: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Interval::new(raw.start, raw.end))
    }
}
