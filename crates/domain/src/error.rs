// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while interpreting schedule data.
///
/// The projection and highlight operations never surface these; they skip
/// the offending record instead. The errors are returned by the individual
/// parsing and conversion helpers so callers can decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stored date (`DD.MM.YYYY`) could not be parsed.
    InvalidStoredDate {
        /// The rejected text.
        text: String,
        /// Why it was rejected.
        reason: String,
    },
    /// An ISO day (`YYYY-MM-DD`) could not be parsed.
    InvalidIsoDay {
        /// The rejected text.
        text: String,
        /// Why it was rejected.
        reason: String,
    },
    /// An ISO-8601 instant could not be parsed.
    InvalidInstant {
        /// The rejected text.
        text: String,
        /// The parser error message.
        error: String,
    },
    /// The reference time zone name is not a known IANA zone.
    InvalidTimezone(String),
    /// A wall-clock time does not map to exactly one instant in the zone.
    AmbiguousLocalTime {
        /// The local date and time that could not be resolved.
        local: String,
        /// The zone in which resolution was attempted.
        zone: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStoredDate { text, reason } => {
                write!(f, "Invalid stored date '{text}': {reason}")
            }
            Self::InvalidIsoDay { text, reason } => {
                write!(f, "Invalid ISO day '{text}': {reason}")
            }
            Self::InvalidInstant { text, error } => {
                write!(f, "Invalid instant '{text}': {error}")
            }
            Self::InvalidTimezone(name) => write!(f, "Invalid timezone: {name}"),
            Self::AmbiguousLocalTime { local, zone } => {
                write!(
                    f,
                    "Local time {local} is ambiguous or does not exist in {zone}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
