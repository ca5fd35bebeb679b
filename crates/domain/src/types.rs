// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::{DateRange, parse_instant, parse_iso_day, parse_stored_date};
use crate::error::DomainError;
use crate::zone::ReferenceZone;
use serde::{Deserialize, Serialize};
use time::Date;

/// A pre-computed schedule as delivered by the data layer.
///
/// The core only reads it. Dates stay textual here and are parsed on use,
/// so a single malformed value drops one derived item instead of the whole
/// schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// First day of the schedule (`YYYY-MM-DD` or an ISO-8601 instant).
    pub schedule_start_date: String,
    /// Last day of the schedule, inclusive.
    pub schedule_end_date: String,
    /// Shifts in display order.
    #[serde(default)]
    pub shifts: Vec<Shift>,
    /// One record per staff member per worked shift.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// The roster. Position in this list determines staff colors.
    #[serde(default)]
    pub staffs: Vec<Staff>,
}

impl Schedule {
    /// The schedule's inclusive day range in `zone`.
    ///
    /// Returns `None` if either bound is unparseable or the range is reversed.
    #[must_use]
    pub fn date_range(&self, zone: &ReferenceZone) -> Option<DateRange> {
        let start: Date = parse_schedule_bound(&self.schedule_start_date, zone).ok()?;
        let end: Date = parse_schedule_bound(&self.schedule_end_date, zone).ok()?;
        DateRange::new(start, end)
    }

    /// Every day of the schedule, ascending. Empty if the range is invalid.
    #[must_use]
    pub fn valid_days(&self, zone: &ReferenceZone) -> Vec<Date> {
        self.date_range(zone)
            .map_or_else(Vec::new, |range| range.days().collect())
    }

    /// Looks up a staff member by id.
    #[must_use]
    pub fn staff(&self, staff_id: &str) -> Option<&Staff> {
        self.staffs.iter().find(|staff| staff.id == staff_id)
    }

    /// Looks up a shift by id.
    #[must_use]
    pub fn shift(&self, shift_id: &str) -> Option<&Shift> {
        self.shifts.iter().find(|shift| shift.id == shift_id)
    }

    /// Looks up an assignment by id.
    #[must_use]
    pub fn assignment(&self, assignment_id: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|assignment| assignment.id == assignment_id)
    }

    /// The first staff member on the roster, if any.
    #[must_use]
    pub fn first_staff(&self) -> Option<&Staff> {
        self.staffs.first()
    }
}

/// Parses a schedule bound: an ISO day, or an instant taken as its day in `zone`.
///
/// # Errors
///
/// Returns an error if the text is neither form.
pub fn parse_schedule_bound(text: &str, zone: &ReferenceZone) -> Result<Date, DomainError> {
    parse_iso_day(text).or_else(|_| zone.day_of(parse_instant(text)?))
}

/// A staff member on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Staff identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Days off, as stored dates (`DD.MM.YYYY`).
    #[serde(default)]
    pub off_days: Option<Vec<String>>,
    /// Pairing intervals recorded on this staff member's side.
    #[serde(default)]
    pub pair_list: Option<Vec<PairRange>>,
}

impl Staff {
    /// Creates a staff member with no off-days or pairings.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            off_days: None,
            pair_list: None,
        }
    }

    /// Off-day texts; empty when none were recorded.
    #[must_use]
    pub fn off_days(&self) -> &[String] {
        self.off_days.as_deref().unwrap_or_default()
    }

    /// Pair records; empty when none were recorded.
    #[must_use]
    pub fn pairs(&self) -> &[PairRange] {
        self.pair_list.as_deref().unwrap_or_default()
    }
}

/// An inclusive interval during which two staff members are paired.
///
/// Stored on one side only; the reverse relation is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairRange {
    /// The partner's staff id.
    pub staff_id: String,
    /// First paired day (`DD.MM.YYYY`).
    #[serde(default)]
    pub start_date: String,
    /// Last paired day (`DD.MM.YYYY`), inclusive.
    #[serde(default)]
    pub end_date: String,
}

impl PairRange {
    /// Creates a pair record.
    #[must_use]
    pub fn new(staff_id: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            staff_id: staff_id.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }

    /// The paired interval, or `None` if a bound is malformed or reversed.
    #[must_use]
    pub fn interval(&self) -> Option<DateRange> {
        let start: Date = parse_stored_date(&self.start_date).ok()?;
        let end: Date = parse_stored_date(&self.end_date).ok()?;
        DateRange::new(start, end)
    }
}

/// A shift definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Shift identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl Shift {
    /// Creates a shift.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }
}

/// One staff member working one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Assignment identifier.
    pub id: String,
    /// The assigned staff member.
    pub staff_id: String,
    /// The assigned shift.
    pub shift_id: String,
    /// Shift start, an ISO-8601 instant.
    pub shift_start: String,
    /// Shift end, an ISO-8601 instant.
    pub shift_end: String,
    /// Whether the assignment changed since it was last published.
    #[serde(default)]
    pub is_updated: bool,
}

impl Assignment {
    /// Creates an assignment that has not been updated.
    #[must_use]
    pub fn new(id: &str, staff_id: &str, shift_id: &str, shift_start: &str, shift_end: &str) -> Self {
        Self {
            id: id.to_string(),
            staff_id: staff_id.to_string(),
            shift_id: shift_id.to_string(),
            shift_start: shift_start.to_string(),
            shift_end: shift_end.to_string(),
            is_updated: false,
        }
    }
}
