// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Instant-to-day conversion in the schedule's reference time zone.
//!
//! Assignments carry absolute instants. The calendar works in days, so every
//! instant is converted to a wall-clock date and time in one declared zone.
//! The zone defaults to UTC.
//!
//! The rest of the crate uses `time` types; the zone math is done with
//! `chrono-tz` and converted at this boundary.

use crate::error::DomainError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use time::{Date, Month, OffsetDateTime, Time};

/// The IANA time zone in which instants become calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceZone {
    tz: Tz,
}

impl Default for ReferenceZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for ReferenceZone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tz: Tz = s
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(s.to_string()))?;
        Ok(Self { tz })
    }
}

impl std::fmt::Display for ReferenceZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tz.name())
    }
}

impl ReferenceZone {
    /// The UTC reference zone.
    #[must_use]
    pub const fn utc() -> Self {
        Self { tz: Tz::UTC }
    }

    /// Returns the IANA name of the zone.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    /// The calendar day of `instant` in this zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the instant is outside the representable range.
    pub fn day_of(&self, instant: OffsetDateTime) -> Result<Date, DomainError> {
        let (date, _) = self.local_parts(instant)?;
        Ok(date)
    }

    /// The wall-clock time of day of `instant` in this zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the instant is outside the representable range.
    pub fn time_of(&self, instant: OffsetDateTime) -> Result<Time, DomainError> {
        let (_, time) = self.local_parts(instant)?;
        Ok(time)
    }

    /// Splits an instant into its local date and time of day.
    ///
    /// # Errors
    ///
    /// Returns an error if the instant is outside the representable range.
    pub fn local_parts(&self, instant: OffsetDateTime) -> Result<(Date, Time), DomainError> {
        let utc: DateTime<Utc> = to_chrono(instant)?;
        let local = utc.with_timezone(&self.tz);
        Ok((
            from_naive_date(local.date_naive())?,
            from_naive_time(local.time())?,
        ))
    }

    /// Builds the instant at local `date` and `time` in this zone.
    ///
    /// A local time repeated by a DST fall-back resolves to the earlier instant.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The local time falls in a DST gap
    /// - The date cannot be represented
    pub fn instant_at(&self, date: Date, time: Time) -> Result<OffsetDateTime, DomainError> {
        let naive_date: NaiveDate = to_naive_date(date)?;
        let naive_time: NaiveTime = to_naive_time(time)?;
        let naive = naive_date.and_time(naive_time);

        let local = self.tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
            DomainError::AmbiguousLocalTime {
                local: naive.to_string(),
                zone: self.name().to_string(),
            }
        })?;

        let nanos: i64 = local
            .with_timezone(&Utc)
            .timestamp_nanos_opt()
            .ok_or_else(|| overflow("converting a local time to an instant"))?;

        OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos))
            .map_err(|_| overflow("converting a local time to an instant"))
    }
}

fn overflow(operation: &str) -> DomainError {
    DomainError::DateArithmeticOverflow {
        operation: operation.to_string(),
    }
}

fn to_chrono(instant: OffsetDateTime) -> Result<DateTime<Utc>, DomainError> {
    DateTime::from_timestamp(instant.unix_timestamp(), instant.nanosecond())
        .ok_or_else(|| overflow("converting an instant to the reference zone"))
}

fn to_naive_date(date: Date) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(
        date.year(),
        u32::from(u8::from(date.month())),
        u32::from(date.day()),
    )
    .ok_or_else(|| overflow("converting a calendar date"))
}

fn to_naive_time(time: Time) -> Result<NaiveTime, DomainError> {
    NaiveTime::from_hms_nano_opt(
        u32::from(time.hour()),
        u32::from(time.minute()),
        u32::from(time.second()),
        time.nanosecond(),
    )
    .ok_or_else(|| overflow("converting a time of day"))
}

fn from_naive_date(date: NaiveDate) -> Result<Date, DomainError> {
    let month: Month = u8::try_from(date.month())
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(|| overflow("converting a calendar date"))?;
    let day: u8 = u8::try_from(date.day()).map_err(|_| overflow("converting a calendar date"))?;

    Date::from_calendar_date(date.year(), month, day)
        .map_err(|_| overflow("converting a calendar date"))
}

fn from_naive_time(time: NaiveTime) -> Result<Time, DomainError> {
    let component = |value: u32| {
        u8::try_from(value).map_err(|_| overflow("converting a time of day"))
    };

    // Leap seconds surface as nanosecond >= 1e9 in chrono; clamp them.
    Time::from_hms_nano(
        component(time.hour())?,
        component(time.minute())?,
        component(time.second())?,
        time.nanosecond().min(999_999_999),
    )
    .map_err(|_| overflow("converting a time of day"))
}
