// SPDX-License-Identifier: AGPL-3.0-or-later

/// Errors reported when parsing textual time and date forms.
///
/// The numeric interval core is total and never reports errors; only
/// the textual boundary (time-of-day strings, civil day strings) does.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// Not an `HH:MM` or `HH:MM:SS` shape.
    #[error("invalid time of day: {0:?}")]
    InvalidTime(String),

    /// Minutes or seconds past 59, or a value past `24:00`.
    #[error("time of day out of range: {0:?}")]
    TimeOutOfRange(String),

    #[error("{0}")]
    Component(#[from] std::num::ParseIntError),

    #[error("{0}")]
    Date(#[from] chrono::ParseError),
}
