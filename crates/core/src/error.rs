// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rota_calendar_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during state transitions.
///
/// A rejected command never changes the state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The staff id is not on the loaded roster.
    #[error("Staff member '{0}' is not on the roster")]
    StaffNotFound(String),
    /// The assignment id is not in the loaded schedule.
    #[error("Assignment '{0}' not found")]
    AssignmentNotFound(String),
    /// The command needs a schedule and none is loaded.
    #[error("No schedule is loaded")]
    NoScheduleLoaded,
    /// The view cannot move past the schedule bounds.
    #[error("Cannot move the view {delta} month(s) past the schedule bounds")]
    NavigationOutOfRange {
        /// The requested month offset.
        delta: i32,
    },
}
