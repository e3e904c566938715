// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Interval set algebra over numeric ranges.
//!
//! # Core types
//!
//! - [`Interval`] — normalized numeric range with the collection
//!   algorithms (`merge`, `inverse`, `limit`, `gaps`, `span`).
//! - [`DateInterval`] — calendar interval over `chrono::DateTime<Utc>`.
//! - [`TimeInterval`] — time-of-day interval within a single day.
//! - [`TimeOfDay`] — `HH:MM` / `HH:MM:SS` instant; `"24:00"` accepted
//!   as the end-of-day bound.
//! - [`ParseError`] — reported for malformed textual forms.
//!
//! # Set operations
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `merge`   | minimal disjoint cover of the inputs |
//! | `inverse` | complement over the real line (clipped to the day for times) |
//! | `limit`   | inputs clipped to a bounding range |
//! | `gaps`    | finite holes between the inputs |
//! | `span`    | enclosing hull from minimum start to maximum end |
//!
//! The domain wrappers convert themselves to plain numeric intervals —
//! milliseconds since the Unix epoch for dates, milliseconds since
//! midnight for times — run the numeric algorithms once, and convert
//! the results back. The numeric core never sees domain types. All
//! operations are pure and synchronous: input slices are never
//! reordered or mutated.
//!
//! # Example
//!
//! ```
//! use spanset::TimeInterval;
//!
//! let busy = [
//!     TimeInterval::parse("08:00", "12:00")?,
//!     TimeInterval::parse("11:30", "14:00")?,
//! ];
//! let free = TimeInterval::inverse(&busy);
//!
//! assert_eq!(free.len(), 2);
//! assert_eq!(free[0].to_string(), "00:00 to 08:00");
//! assert_eq!(free[1].to_string(), "14:00 to 24:00");
//! # Ok::<(), spanset::ParseError>(())
//! ```

mod civil;
mod date_interval;
mod errors;
mod interval;
mod time_interval;
mod time_of_day;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use civil::{date_at, day_of, time_of};
pub use date_interval::DateInterval;
pub use errors::ParseError;
pub use interval::Interval;
pub use time_interval::TimeInterval;
pub use time_of_day::TimeOfDay;
