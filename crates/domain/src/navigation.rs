// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! View-window navigation and per-day cell flags.
//!
//! The renderer owns its buttons and cells; this module only answers whether
//! moving the view is allowed and how a given day should be marked.

use crate::color::Color;
use crate::dates::DateRange;
use crate::error::DomainError;
use crate::highlights::{DaySet, HighlightMap};
use crate::types::Schedule;
use crate::zone::ReferenceZone;
use serde::Serialize;
use time::util::days_in_month;
use time::{Date, Month};

/// Whether the view can move before or after its current window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    /// The view starts after the schedule does.
    pub can_go_earlier: bool,
    /// The view ends before the schedule does.
    pub can_go_later: bool,
}

/// Navigation flags for `view` against the schedule range.
///
/// Without a schedule range neither direction is allowed.
#[must_use]
pub fn navigation(view: &DateRange, schedule: Option<&DateRange>) -> Navigation {
    schedule.map_or_else(Navigation::default, |range| Navigation {
        can_go_earlier: view.start() > range.start(),
        can_go_later: view.end() < range.end(),
    })
}

/// The day the calendar opens on: the schedule's first day.
#[must_use]
pub fn initial_view_date(schedule: &Schedule, zone: &ReferenceZone) -> Option<Date> {
    schedule.date_range(zone).map(|range| range.start())
}

/// The whole month containing `day`.
#[must_use]
pub fn month_window(day: Date) -> DateRange {
    let first: Date = day.replace_day(1).unwrap_or(day);
    let last: Date = day
        .replace_day(days_in_month(day.month(), day.year()))
        .unwrap_or(day);
    DateRange::new(first, last).unwrap_or_else(|| DateRange::single(day))
}

/// Moves `day` by `delta` months, clamping the day of month.
///
/// # Errors
///
/// Returns an error if the resulting year is out of range.
pub fn shift_month(day: Date, delta: i32) -> Result<Date, DomainError> {
    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("shifting {day} by {delta} months"),
    };

    let total: i32 = day
        .year()
        .checked_mul(12)
        .and_then(|months| months.checked_add(i32::from(u8::from(day.month())) - 1))
        .and_then(|months| months.checked_add(delta))
        .ok_or_else(overflow)?;

    let year: i32 = total.div_euclid(12);
    let month: Month = u8::try_from(total.rem_euclid(12) + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(overflow)?;
    let day_of_month: u8 = day.day().min(days_in_month(month, year));

    Date::from_calendar_date(year, month, day_of_month).map_err(|_| overflow())
}

/// How a renderer should mark one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    /// The day lies inside the schedule range.
    pub in_range: bool,
    /// The focal staff member is off.
    pub off_day: bool,
    /// The partner's color, if the focal staff member is paired.
    pub pair_color: Option<Color>,
}

/// Cell flags for `day`.
#[must_use]
pub fn day_cell(
    day: Date,
    range: Option<&DateRange>,
    off_days: &DaySet,
    pairs: &HighlightMap,
) -> DayCell {
    DayCell {
        in_range: range.is_some_and(|range| range.contains(day)),
        off_day: off_days.contains(day),
        pair_color: pairs.get(day),
    }
}
