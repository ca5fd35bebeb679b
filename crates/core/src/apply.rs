// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::ScheduleAction;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CalendarState, TransitionResult};
use rota_calendar_domain::{
    Assignment, DateRange, ReassignmentRequest, Schedule, month_window, reassign, shift_month,
};
use time::Date;

/// Applies a command to the current state, producing a new state and an optional action.
///
/// This function is pure: the input state is never modified.
///
/// # Arguments
///
/// * `state` - The current calendar state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and any outgoing action
/// * `Err(CoreError)` if the command is rejected
///
/// # Errors
///
/// Returns an error if:
/// - The command needs a schedule and none is loaded
/// - The selected staff member is not on the roster
/// - The moved assignment does not exist
/// - Navigation would leave the schedule range
/// - A date or time conversion fails
pub fn apply(state: &CalendarState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::LoadSchedule(schedule) => {
            let mut new_state: CalendarState = state.clone();
            new_state.load(schedule);

            Ok(TransitionResult {
                new_state,
                action: None,
            })
        }
        Command::SelectStaff { staff_id } => {
            let schedule: &Schedule = state.schedule().ok_or(CoreError::NoScheduleLoaded)?;
            if schedule.staff(&staff_id).is_none() {
                return Err(CoreError::StaffNotFound(staff_id));
            }

            let mut new_state: CalendarState = state.clone();
            new_state.select(staff_id);

            Ok(TransitionResult {
                new_state,
                action: None,
            })
        }
        Command::MoveEvent {
            assignment_id,
            new_day,
        } => {
            let schedule: &Schedule = state.schedule().ok_or(CoreError::NoScheduleLoaded)?;
            let assignment: &Assignment = schedule
                .assignment(&assignment_id)
                .ok_or(CoreError::AssignmentNotFound(assignment_id))?;

            // Every drop day is reported, including days outside the schedule
            let request: ReassignmentRequest = reassign(assignment, new_day, state.zone())?;

            Ok(TransitionResult {
                new_state: state.clone(),
                action: Some(ScheduleAction::UpdateScheduleAssignment(request)),
            })
        }
        Command::NavigateMonths { delta } => {
            let range: DateRange = state.date_range().ok_or(CoreError::NoScheduleLoaded)?;
            let current: Date = state.view_date().unwrap_or_else(|| range.start());

            let target: Date = shift_month(current, delta)?;
            if month_window(target).intersect(&range).is_none() {
                return Err(CoreError::NavigationOutOfRange { delta });
            }

            let mut new_state: CalendarState = state.clone();
            new_state.show(target);

            Ok(TransitionResult {
                new_state,
                action: None,
            })
        }
    }
}
