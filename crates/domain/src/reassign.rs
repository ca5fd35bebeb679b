// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Moving an assignment to another calendar day.
//!
//! The local time of day of both instants is kept. Both instants move by the
//! number of days between the original start day and the target day, so a
//! shift that ends after midnight still ends the day after it starts.

use crate::dates::parse_instant;
use crate::error::DomainError;
use crate::types::Assignment;
use crate::zone::ReferenceZone;
use serde::{Deserialize, Serialize};
use time::{Date, Duration, OffsetDateTime, Time};

/// The update request emitted when an event is moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignmentRequest {
    /// The assignment id.
    pub id: String,
    /// New shift start.
    #[serde(with = "time::serde::rfc3339")]
    pub shift_start: OffsetDateTime,
    /// New shift end.
    #[serde(with = "time::serde::rfc3339")]
    pub shift_end: OffsetDateTime,
}

/// Computes the request that moves `assignment` to `new_day`.
///
/// # Arguments
///
/// * `assignment` - The assignment as currently stored
/// * `new_day` - The calendar day the event was dropped on
/// * `zone` - The zone whose wall-clock times are preserved
///
/// # Errors
///
/// Returns an error if:
/// - Either stored instant cannot be parsed
/// - The preserved local time falls in a DST gap on the new day
/// - Date arithmetic overflows
pub fn reassign(
    assignment: &Assignment,
    new_day: Date,
    zone: &ReferenceZone,
) -> Result<ReassignmentRequest, DomainError> {
    let start: OffsetDateTime = parse_instant(&assignment.shift_start)?;
    let end: OffsetDateTime = parse_instant(&assignment.shift_end)?;

    let (start_day, start_time): (Date, Time) = zone.local_parts(start)?;
    let (end_day, end_time): (Date, Time) = zone.local_parts(end)?;

    let offset: Duration = new_day - start_day;
    let new_end_day: Date =
        end_day
            .checked_add(offset)
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: "moving the shift end".to_string(),
            })?;

    Ok(ReassignmentRequest {
        id: assignment.id.clone(),
        shift_start: zone.instant_at(new_day, start_time)?,
        shift_end: zone.instant_at(new_end_day, end_time)?,
    })
}
