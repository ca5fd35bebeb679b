// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_empty_state, create_loaded_state, create_test_schedule};
use crate::{CalendarState, Command, CoreError, ScheduleAction, Selection, TransitionResult, apply};
use rota_calendar_domain::{DateRange, DomainError, ReassignmentRequest, Schedule};
use time::Date;
use time::macros::{date, datetime};

#[test]
fn test_move_event_emits_reassignment() {
    let state: CalendarState = create_loaded_state();

    let result: TransitionResult = apply(
        &state,
        Command::MoveEvent {
            assignment_id: String::from("as-1"),
            new_day: date!(2024 - 03 - 07),
        },
    )
    .unwrap();

    let expected: ReassignmentRequest = ReassignmentRequest {
        id: String::from("as-1"),
        shift_start: datetime!(2024-03-07 09:00 UTC),
        shift_end: datetime!(2024-03-07 17:00 UTC),
    };
    assert_eq!(
        result.action,
        Some(ScheduleAction::UpdateScheduleAssignment(expected))
    );
}

#[test]
fn test_move_event_does_not_change_state() {
    let state: CalendarState = create_loaded_state();

    let result: TransitionResult = apply(
        &state,
        Command::MoveEvent {
            assignment_id: String::from("as-1"),
            new_day: date!(2024 - 03 - 07),
        },
    )
    .unwrap();

    assert_eq!(result.new_state, state);
}

#[test]
fn test_move_event_of_other_staff_member() {
    let state: CalendarState = create_loaded_state();

    let result: TransitionResult = apply(
        &state,
        Command::MoveEvent {
            assignment_id: String::from("as-2"),
            new_day: date!(2024 - 03 - 12),
        },
    )
    .unwrap();

    let Some(ScheduleAction::UpdateScheduleAssignment(request)) = result.action else {
        panic!("expected an update action");
    };
    assert_eq!(request.shift_start, datetime!(2024-03-12 22:00 UTC));
    assert_eq!(request.shift_end, datetime!(2024-03-13 06:00 UTC));
}

#[test]
fn test_move_event_unknown_assignment() {
    let state: CalendarState = create_loaded_state();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::MoveEvent {
            assignment_id: String::from("missing"),
            new_day: date!(2024 - 03 - 07),
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::AssignmentNotFound(String::from("missing"))
    );
}

#[test]
fn test_move_event_outside_schedule_still_reported() {
    let state: CalendarState = create_loaded_state();

    let result: TransitionResult = apply(
        &state,
        Command::MoveEvent {
            assignment_id: String::from("as-1"),
            new_day: date!(2024 - 04 - 01),
        },
    )
    .unwrap();

    let Some(ScheduleAction::UpdateScheduleAssignment(request)) = result.action else {
        panic!("expected an update action");
    };
    assert_eq!(request.id, "as-1");
    assert_eq!(request.shift_start, datetime!(2024-04-01 09:00 UTC));
    assert_eq!(request.shift_end, datetime!(2024-04-01 17:00 UTC));
    assert_eq!(result.new_state, state);
}

#[test]
fn test_move_event_with_malformed_schedule_bounds() {
    let mut schedule: Schedule = create_test_schedule();
    schedule.schedule_end_date = String::from("garbage");
    let state: CalendarState = apply(&create_empty_state(), Command::LoadSchedule(schedule))
        .unwrap()
        .new_state;

    let result: TransitionResult = apply(
        &state,
        Command::MoveEvent {
            assignment_id: String::from("as-1"),
            new_day: date!(2024 - 03 - 07),
        },
    )
    .unwrap();

    let Some(ScheduleAction::UpdateScheduleAssignment(request)) = result.action else {
        panic!("expected an update action");
    };
    assert_eq!(request.shift_start, datetime!(2024-03-07 09:00 UTC));
}

#[test]
fn test_move_event_with_malformed_instant() {
    let mut schedule: Schedule = create_test_schedule();
    schedule.assignments[0].shift_start = String::from("05.03.2024 09:00");
    let state: CalendarState = apply(&create_empty_state(), Command::LoadSchedule(schedule))
        .unwrap()
        .new_state;

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::MoveEvent {
            assignment_id: String::from("as-1"),
            new_day: date!(2024 - 03 - 07),
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidInstant { .. }))
    ));
}

#[test]
fn test_commands_without_schedule_rejected() {
    let state: CalendarState = create_empty_state();

    let select: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::SelectStaff {
            staff_id: String::from("A"),
        },
    );
    let moved: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::MoveEvent {
            assignment_id: String::from("as-1"),
            new_day: date!(2024 - 03 - 07),
        },
    );
    let navigate: Result<TransitionResult, CoreError> =
        apply(&state, Command::NavigateMonths { delta: 1 });

    assert_eq!(select.unwrap_err(), CoreError::NoScheduleLoaded);
    assert_eq!(moved.unwrap_err(), CoreError::NoScheduleLoaded);
    assert_eq!(navigate.unwrap_err(), CoreError::NoScheduleLoaded);
}

fn create_two_month_state() -> CalendarState {
    let mut schedule: Schedule = create_test_schedule();
    schedule.schedule_start_date = String::from("2024-02-15");
    schedule.schedule_end_date = String::from("2024-04-15");
    apply(&create_empty_state(), Command::LoadSchedule(schedule))
        .unwrap()
        .new_state
}

#[test]
fn test_navigate_months_moves_window() {
    let state: CalendarState = create_two_month_state();
    assert_eq!(state.view_date(), Some(date!(2024 - 02 - 15)));
    assert!(!state.view().navigation.can_go_earlier);
    assert!(state.view().navigation.can_go_later);

    let next: CalendarState = apply(&state, Command::NavigateMonths { delta: 1 })
        .unwrap()
        .new_state;

    let window: DateRange = next.view().window.unwrap();
    assert_eq!(window.start(), date!(2024 - 03 - 01));
    assert_eq!(window.end(), date!(2024 - 03 - 31));
    assert!(next.view().navigation.can_go_earlier);
    assert!(next.view().navigation.can_go_later);

    let last: CalendarState = apply(&next, Command::NavigateMonths { delta: 1 })
        .unwrap()
        .new_state;
    assert!(last.view().navigation.can_go_earlier);
    assert!(!last.view().navigation.can_go_later);
}

#[test]
fn test_navigate_months_past_bounds_rejected() {
    let state: CalendarState = create_two_month_state();

    let earlier: Result<TransitionResult, CoreError> =
        apply(&state, Command::NavigateMonths { delta: -1 });
    let too_far: Result<TransitionResult, CoreError> =
        apply(&state, Command::NavigateMonths { delta: 3 });

    assert_eq!(
        earlier.unwrap_err(),
        CoreError::NavigationOutOfRange { delta: -1 }
    );
    assert_eq!(
        too_far.unwrap_err(),
        CoreError::NavigationOutOfRange { delta: 3 }
    );
}

#[test]
fn test_reload_keeps_view_month_inside_range() {
    let state: CalendarState = create_two_month_state();
    let moved: CalendarState = apply(&state, Command::NavigateMonths { delta: 1 })
        .unwrap()
        .new_state;

    let mut schedule: Schedule = moved.schedule().unwrap().clone();
    schedule.assignments[0].is_updated = true;
    let reloaded: CalendarState = apply(&moved, Command::LoadSchedule(schedule))
        .unwrap()
        .new_state;

    assert_eq!(reloaded.view_date(), Some(date!(2024 - 03 - 15)));
    assert!(reloaded.view().events[0].is_updated);
    assert_eq!(
        reloaded.selection(),
        &Selection::StaffSelected(String::from("A"))
    );
}

#[test]
fn test_apply_is_pure() {
    let state: CalendarState = create_loaded_state();
    let before: CalendarState = state.clone();
    let day: Date = date!(2024 - 03 - 07);

    let _ = apply(
        &state,
        Command::SelectStaff {
            staff_id: String::from("B"),
        },
    )
    .unwrap();
    let _ = apply(
        &state,
        Command::MoveEvent {
            assignment_id: String::from("as-1"),
            new_day: day,
        },
    )
    .unwrap();

    assert_eq!(state, before);
}
