// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::{ActionDispatcher, ScheduleAction};
use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CalendarState, CalendarView, TransitionResult};
use rota_calendar_domain::Schedule;
use tracing::{debug, info, warn};

/// Holds the calendar state and forwards emitted actions to a dispatcher.
///
/// This is the boundary between the pure transition function and the outside
/// world: it owns the only mutable copy of the state and the only side effect.
#[derive(Debug)]
pub struct CalendarController<D: ActionDispatcher> {
    state: CalendarState,
    dispatcher: D,
}

impl<D: ActionDispatcher> CalendarController<D> {
    /// Creates a controller around an initial state.
    pub const fn new(state: CalendarState, dispatcher: D) -> Self {
        Self { state, dispatcher }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &CalendarState {
        &self.state
    }

    /// The current view.
    #[must_use]
    pub const fn view(&self) -> &CalendarView {
        self.state.view()
    }

    /// The dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Consumes the controller, returning the state and the dispatcher.
    #[must_use]
    pub fn into_parts(self) -> (CalendarState, D) {
        (self.state, self.dispatcher)
    }

    /// Applies `command`, keeping the previous state if it is rejected.
    ///
    /// # Errors
    ///
    /// Returns the transition error; the state is unchanged in that case.
    pub fn handle(&mut self, command: Command) -> Result<&CalendarView, CoreError> {
        let name: &'static str = command.name();

        let result: TransitionResult = match apply(&self.state, command) {
            Ok(result) => result,
            Err(err) => {
                warn!(command = name, error = %err, "Command rejected");
                return Err(err);
            }
        };

        self.state = result.new_state;
        if let Some(action) = result.action {
            self.send(action);
        }

        let view: &CalendarView = self.state.view();
        debug!(
            command = name,
            staff_id = view.selection.staff_id().unwrap_or_default(),
            events = view.events.len(),
            off_days = view.off_days.len(),
            pair_days = view.pair_highlights.len(),
            "View rebuilt"
        );

        Ok(view)
    }

    /// Announces that a schedule fetch has started.
    pub fn begin_fetch(&mut self) {
        info!("Fetching schedule");
        self.send(ScheduleAction::FetchSchedule);
    }

    /// Records the outcome of a schedule fetch.
    ///
    /// A successful fetch loads the schedule. A failed fetch is reported to
    /// the store and leaves the state as it was.
    ///
    /// # Errors
    ///
    /// Returns an error if loading the fetched schedule is rejected.
    pub fn complete_fetch(
        &mut self,
        outcome: Result<Schedule, String>,
    ) -> Result<&CalendarView, CoreError> {
        match outcome {
            Ok(schedule) => {
                info!(
                    staff = schedule.staffs.len(),
                    shifts = schedule.shifts.len(),
                    assignments = schedule.assignments.len(),
                    "Schedule fetched"
                );
                self.send(ScheduleAction::FetchScheduleSuccess);
                self.handle(Command::LoadSchedule(schedule))
            }
            Err(reason) => {
                warn!(reason = %reason, "Schedule fetch failed");
                self.send(ScheduleAction::FetchScheduleFailed { reason });
                Ok(self.state.view())
            }
        }
    }

    fn send(&mut self, action: ScheduleAction) {
        if let ScheduleAction::UpdateScheduleAssignment(request) = &action {
            info!(
                assignment_id = %request.id,
                shift_start = %request.shift_start,
                shift_end = %request.shift_end,
                "Dispatching assignment update"
            );
        }
        self.dispatcher.dispatch(action);
    }
}
