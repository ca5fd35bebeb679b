// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_calendar_domain::Schedule;
use time::Date;

/// A command represents user or data-layer intent as data only.
///
/// Commands are the only way to change the calendar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the schedule and rebuild every derived view.
    LoadSchedule(Schedule),
    /// Make a staff member the focal staff.
    SelectStaff {
        /// The staff id to focus.
        staff_id: String,
    },
    /// An event was dropped on another day.
    ///
    /// Produces an update action; the state itself is unchanged until the
    /// data layer delivers the updated schedule.
    MoveEvent {
        /// The assignment behind the event.
        assignment_id: String,
        /// The day it was dropped on.
        new_day: Date,
    },
    /// Move the visible month window.
    NavigateMonths {
        /// Months to move; negative moves earlier.
        delta: i32,
    },
}

impl Command {
    /// The command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadSchedule(_) => "LoadSchedule",
            Self::SelectStaff { .. } => "SelectStaff",
            Self::MoveEvent { .. } => "MoveEvent",
            Self::NavigateMonths { .. } => "NavigateMonths",
        }
    }
}
