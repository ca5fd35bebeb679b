// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Assignment, DateRange, PairRange, Schedule, Shift, Staff};
use time::macros::date;

pub fn create_test_staff(id: &str, name: &str, pairs: Vec<PairRange>) -> Staff {
    let mut staff: Staff = Staff::new(id, name);
    if !pairs.is_empty() {
        staff.pair_list = Some(pairs);
    }
    staff
}

/// A and B, with A's record pairing them from 01.03.2024 to 03.03.2024.
pub fn create_test_pair_roster() -> Vec<Staff> {
    vec![
        create_test_staff(
            "A",
            "Ayla",
            vec![PairRange::new("B", "01.03.2024", "03.03.2024")],
        ),
        create_test_staff("B", "Berk", Vec::new()),
    ]
}

pub fn march_2024() -> DateRange {
    DateRange::new(date!(2024 - 03 - 01), date!(2024 - 03 - 31)).unwrap()
}

/// A March 2024 schedule with two shifts and no assignments.
pub fn create_test_schedule(staffs: Vec<Staff>) -> Schedule {
    Schedule {
        schedule_start_date: String::from("2024-03-01"),
        schedule_end_date: String::from("2024-03-31"),
        shifts: vec![Shift::new("day", "Day"), Shift::new("night", "Night")],
        assignments: Vec::new(),
        staffs,
    }
}

pub fn create_test_assignment(id: &str, staff_id: &str, shift_id: &str, day: &str) -> Assignment {
    Assignment::new(
        id,
        staff_id,
        shift_id,
        &format!("{day}T09:00:00Z"),
        &format!("{day}T17:00:00Z"),
    )
}
