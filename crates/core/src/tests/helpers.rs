// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CalendarState, Command, apply};
use rota_calendar_domain::{Assignment, PairRange, ReferenceZone, Schedule, Shift, Staff};

/// A March 2024 schedule: Ayla is paired with Berk on 1-3 March and off on
/// 8 March; Cem has no assignments.
pub fn create_test_schedule() -> Schedule {
    let mut ayla: Staff = Staff::new("A", "Ayla");
    ayla.off_days = Some(vec![String::from("08.03.2024")]);
    ayla.pair_list = Some(vec![PairRange::new("B", "01.03.2024", "03.03.2024")]);

    Schedule {
        schedule_start_date: String::from("2024-03-01"),
        schedule_end_date: String::from("2024-03-31"),
        shifts: vec![Shift::new("day", "Day"), Shift::new("night", "Night")],
        assignments: vec![
            Assignment::new(
                "as-1",
                "A",
                "day",
                "2024-03-05T09:00:00Z",
                "2024-03-05T17:00:00Z",
            ),
            Assignment::new(
                "as-2",
                "B",
                "night",
                "2024-03-05T22:00:00Z",
                "2024-03-06T06:00:00Z",
            ),
            Assignment::new(
                "as-3",
                "A",
                "night",
                "2024-03-20T22:00:00Z",
                "2024-03-21T06:00:00Z",
            ),
        ],
        staffs: vec![ayla, Staff::new("B", "Berk"), Staff::new("C", "Cem")],
    }
}

pub fn create_empty_state() -> CalendarState {
    CalendarState::new(ReferenceZone::utc(), "tr")
}

pub fn create_loaded_state() -> CalendarState {
    apply(
        &create_empty_state(),
        Command::LoadSchedule(create_test_schedule()),
    )
    .unwrap()
    .new_state
}
