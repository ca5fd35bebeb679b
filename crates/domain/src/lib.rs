// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod color;
mod dates;
mod error;
mod highlights;
mod navigation;
mod pairing;
mod profile;
mod projection;
mod reassign;
mod types;
mod zone;

#[cfg(test)]
mod tests;

pub use color::{
    Color, ColorMap, FALLBACK_COLOR, MIN_CONTRAST_RATIO, STAFF_PALETTE_LEN, contrast_ratio,
    palette_color, shift_accent_color, staff_color, staff_palette,
};
pub use dates::{
    DateRange, Days, enumerate_days, format_as_iso_day, format_as_stored, format_day_key,
    parse_day_key, parse_instant, parse_iso_day, parse_stored_date,
};
pub use highlights::{DaySet, HighlightMap};
pub use navigation::{
    DayCell, Navigation, day_cell, initial_view_date, month_window, navigation, shift_month,
};
pub use pairing::{PairDetail, UNKNOWN_PARTNER_NAME, compute_pair_highlights, pair_detail_for_date};
pub use profile::{ProfileCard, RoleField, SessionFallback, UserProfile};
pub use projection::{
    CalendarEvent, EventDetail, EventDetails, ScheduleProjection, event_detail, off_days_in_range,
    project_assignment, project_events,
};
pub use reassign::{ReassignmentRequest, reassign};
pub use zone::ReferenceZone;

// Re-export public types
pub use error::DomainError;
pub use types::{Assignment, PairRange, Schedule, Shift, Staff, parse_schedule_bound};
