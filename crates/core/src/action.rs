// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_calendar_domain::ReassignmentRequest;
use serde::Serialize;

/// Actions sent to the schedule store.
///
/// Serialized as `{ "type": ..., "payload": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleAction {
    /// A schedule fetch started.
    FetchSchedule,
    /// A schedule fetch completed.
    FetchScheduleSuccess,
    /// A schedule fetch failed.
    FetchScheduleFailed {
        /// Why the fetch failed.
        reason: String,
    },
    /// Persist a moved assignment.
    UpdateScheduleAssignment(ReassignmentRequest),
}

/// Receives actions emitted by the calendar.
///
/// Dispatch is fire-and-forget; the calendar never waits on the store.
pub trait ActionDispatcher {
    /// Delivers one action.
    fn dispatch(&mut self, action: ScheduleAction);
}

/// Collects actions in order.
impl ActionDispatcher for Vec<ScheduleAction> {
    fn dispatch(&mut self, action: ScheduleAction) {
        self.push(action);
    }
}
