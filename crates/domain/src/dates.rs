// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date parsing, formatting and day enumeration.
//!
//! Three textual conventions meet at the boundary:
//!
//! - `DD.MM.YYYY`: the stored format (off-days, pair interval bounds)
//! - `YYYY-MM-DD`: ISO days (schedule range, renderer event dates)
//! - `DD-MM-YYYY`: highlight map keys
//!
//! Everything here works at day granularity. Converting an absolute instant
//! to a day is the job of [`crate::ReferenceZone`].

use crate::error::DomainError;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::str::FromStr;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

/// Parses a stored date in `DD.MM.YYYY` form.
///
/// Unpadded parts (`1.3.2024`) are accepted so that values written by hand
/// normalize to the same day as their padded form.
///
/// # Errors
///
/// Returns `DomainError::InvalidStoredDate` if:
/// - The text does not have exactly three dot-separated parts
/// - Any part is not a decimal number
/// - The parts do not form a real calendar date
pub fn parse_stored_date(text: &str) -> Result<Date, DomainError> {
    parse_day_month_year(text, '.').map_err(|reason| DomainError::InvalidStoredDate {
        text: text.to_string(),
        reason,
    })
}

/// Parses a highlight key in `DD-MM-YYYY` form.
#[must_use]
pub fn parse_day_key(key: &str) -> Option<Date> {
    parse_day_month_year(key, '-').ok()
}

/// Parses an ISO day in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::InvalidIsoDay` if the text is not a valid ISO day.
pub fn parse_iso_day(text: &str) -> Result<Date, DomainError> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]")).map_err(|err| {
        DomainError::InvalidIsoDay {
            text: text.to_string(),
            reason: err.to_string(),
        }
    })
}

/// Parses an ISO-8601 instant such as `2024-03-05T09:00:00.000Z`.
///
/// # Errors
///
/// Returns `DomainError::InvalidInstant` if the text is not RFC 3339.
pub fn parse_instant(text: &str) -> Result<OffsetDateTime, DomainError> {
    OffsetDateTime::parse(text.trim(), &Rfc3339).map_err(|err| DomainError::InvalidInstant {
        text: text.to_string(),
        error: err.to_string(),
    })
}

/// Formats a day as `DD.MM.YYYY`.
#[must_use]
pub fn format_as_stored(date: Date) -> String {
    format!(
        "{:02}.{:02}.{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Formats a day as `YYYY-MM-DD`.
#[must_use]
pub fn format_as_iso_day(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Formats a day as a highlight key, `DD-MM-YYYY`.
#[must_use]
pub fn format_day_key(date: Date) -> String {
    format!(
        "{:02}-{:02}-{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

/// Enumerates every day from `start_text` to `end_text` inclusive.
///
/// Both bounds are stored dates (`DD.MM.YYYY`). The result is empty when
/// either bound is invalid or the end precedes the start.
#[must_use]
pub fn enumerate_days(start_text: &str, end_text: &str) -> Vec<Date> {
    let (Ok(start), Ok(end)) = (parse_stored_date(start_text), parse_stored_date(end_text)) else {
        return Vec::new();
    };

    DateRange::new(start, end).map_or_else(Vec::new, |range| range.days().collect())
}

fn parse_day_month_year(text: &str, separator: char) -> Result<Date, String> {
    let parts: Vec<&str> = text.trim().split(separator).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(format!("expected three '{separator}'-separated parts"));
    };

    let day: u8 = parse_number(day).ok_or("day is not a number")?;
    let month: u8 = parse_number(month).ok_or("month is not a number")?;
    let year: i32 = parse_number(year).ok_or("year is not a number")?;

    let month: Month = Month::try_from(month).map_err(|_| "month out of range")?;
    Date::from_calendar_date(year, month, day).map_err(|err| err.to_string())
}

fn parse_number<T: FromStr>(token: &str) -> Option<T> {
    let token: &str = token.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a range, or `None` if `end` precedes `start`.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// A range covering exactly one day.
    #[must_use]
    pub const fn single(day: Date) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Whether `day` lies inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days in the range (always at least 1).
    #[must_use]
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }

    /// The overlap of two ranges, if any.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        Self::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Iterates the days of the range in ascending order.
    #[must_use]
    pub const fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut range = serializer.serialize_struct("DateRange", 2)?;
        range.serialize_field("start", &format_as_iso_day(self.start))?;
        range.serialize_field("end", &format_as_iso_day(self.end))?;
        range.end()
    }
}

/// Ascending day iterator returned by [`DateRange::days`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current: Date = self.next.filter(|day| *day <= self.end)?;
        self.next = current.next_day();
        Some(current)
    }
}
