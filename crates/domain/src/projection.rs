// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule projection for one focal staff member.
//!
//! This module turns a schedule into what a month-grid renderer needs:
//! - One calendar event per assignment of the focal staff member
//! - The set of off-days inside the schedule range
//!
//! ## Invariants
//!
//! - The projection is pure: the schedule is never mutated
//! - Events dated outside the schedule range are kept and marked invalid
//! - Unknown staff/shift ids resolve to empty display strings
//! - Assignments with unparseable instants produce no event

use crate::color::{Color, ColorMap};
use crate::dates::{
    DateRange, format_as_iso_day, format_as_stored, parse_instant, parse_stored_date,
};
use crate::error::DomainError;
use crate::highlights::DaySet;
use crate::types::{Assignment, Schedule};
use crate::zone::ReferenceZone;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use time::{Date, OffsetDateTime, Time};

/// A calendar event derived from one assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    /// The assignment id.
    pub id: String,
    /// The shift name.
    pub title: String,
    /// The calendar day of the shift start in the reference zone.
    #[serde(serialize_with = "serialize_iso_day")]
    pub date: Date,
    /// The staff member's color.
    pub color: Color,
    /// Whether `date` falls inside the schedule range.
    pub valid: bool,
    /// Whether the assignment changed since it was last published.
    pub is_updated: bool,
    /// Auxiliary display fields.
    pub details: EventDetails,
}

/// Display fields carried alongside an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    /// The staff member's name.
    pub staff_name: String,
    /// The shift name.
    pub shift_name: String,
    /// Shift start instant.
    #[serde(with = "time::serde::rfc3339")]
    pub shift_start: OffsetDateTime,
    /// Shift end instant.
    #[serde(with = "time::serde::rfc3339")]
    pub shift_end: OffsetDateTime,
    /// The shift's accent color.
    pub accent_color: Color,
}

/// Everything derived from a schedule for one focal staff member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleProjection {
    /// One event per assignment of the focal staff member, in schedule order.
    pub events: Vec<CalendarEvent>,
    /// Schedule days on which the focal staff member is off.
    pub off_days: DaySet,
}

fn serialize_iso_day<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_as_iso_day(*date))
}

/// Projects `schedule` for the `focal` staff member.
///
/// Returns an empty projection when there is no focal staff member.
#[must_use]
pub fn project_events(
    schedule: &Schedule,
    focal: Option<&str>,
    colors: &ColorMap,
    zone: &ReferenceZone,
) -> ScheduleProjection {
    let Some(focal) = focal else {
        return ScheduleProjection::default();
    };

    let range: Option<DateRange> = schedule.date_range(zone);

    let events: Vec<CalendarEvent> = schedule
        .assignments
        .iter()
        .filter(|assignment| assignment.staff_id == focal)
        .filter_map(|assignment| {
            project_assignment(schedule, assignment, range.as_ref(), colors, zone).ok()
        })
        .collect();

    let off_days: DaySet = range
        .map(|range| off_days_in_range(schedule, focal, &range))
        .unwrap_or_default();

    ScheduleProjection { events, off_days }
}

/// Builds the event for one assignment.
///
/// # Errors
///
/// Returns an error if either shift instant cannot be parsed or converted.
pub fn project_assignment(
    schedule: &Schedule,
    assignment: &Assignment,
    range: Option<&DateRange>,
    colors: &ColorMap,
    zone: &ReferenceZone,
) -> Result<CalendarEvent, DomainError> {
    let shift_start: OffsetDateTime = parse_instant(&assignment.shift_start)?;
    let shift_end: OffsetDateTime = parse_instant(&assignment.shift_end)?;
    let date: Date = zone.day_of(shift_start)?;

    let shift_name: String = schedule
        .shift(&assignment.shift_id)
        .map(|shift| shift.name.clone())
        .unwrap_or_default();
    let staff_name: String = schedule
        .staff(&assignment.staff_id)
        .map(|staff| staff.name.clone())
        .unwrap_or_default();

    Ok(CalendarEvent {
        id: assignment.id.clone(),
        title: shift_name.clone(),
        date,
        color: colors.staff_color(&assignment.staff_id),
        valid: range.is_some_and(|range| range.contains(date)),
        is_updated: assignment.is_updated,
        details: EventDetails {
            staff_name,
            shift_name,
            shift_start,
            shift_end,
            accent_color: colors.accent_color(&assignment.shift_id),
        },
    })
}

/// Schedule days listed among `staff_id`'s off-days.
///
/// Off-day texts are parsed before comparison, so `1.3.2024` and
/// `01.03.2024` name the same day. Unparseable entries are ignored.
#[must_use]
pub fn off_days_in_range(schedule: &Schedule, staff_id: &str, range: &DateRange) -> DaySet {
    let Some(staff) = schedule.staff(staff_id) else {
        return DaySet::new();
    };

    let listed: HashSet<Date> = staff
        .off_days()
        .iter()
        .filter_map(|text| parse_stored_date(text).ok())
        .collect();

    range.days().filter(|day| listed.contains(day)).collect()
}

/// What a renderer shows when an event is clicked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// The staff member's name.
    pub staff_name: String,
    /// The shift name.
    pub shift_name: String,
    /// The event day (`DD.MM.YYYY`).
    pub date: String,
    /// Local start time (`HH:mm`).
    pub start_time: String,
    /// Local end time (`HH:mm`).
    pub end_time: String,
}

/// Builds the click detail for `event`, with times in `zone`.
///
/// # Errors
///
/// Returns an error if an instant cannot be converted to the zone.
pub fn event_detail(event: &CalendarEvent, zone: &ReferenceZone) -> Result<EventDetail, DomainError> {
    Ok(EventDetail {
        staff_name: event.details.staff_name.clone(),
        shift_name: event.details.shift_name.clone(),
        date: format_as_stored(event.date),
        start_time: format_clock(zone.time_of(event.details.shift_start)?),
        end_time: format_clock(zone.time_of(event.details.shift_end)?),
    })
}

fn format_clock(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
