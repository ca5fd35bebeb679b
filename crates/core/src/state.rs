// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The calendar state holder.
//!
//! ## Invariants
//!
//! - The view is rebuilt wholesale whenever the schedule, the selection or
//!   the view window changes; it is never patched in place
//! - `StaffSelected` always names a staff member on the loaded roster

use crate::action::ScheduleAction;
use crate::error::CoreError;
use rota_calendar_domain::{
    CalendarEvent, Color, ColorMap, DateRange, DayCell, DaySet, EventDetail, HighlightMap,
    Navigation, PairDetail, ReferenceZone, Schedule, ScheduleProjection, compute_pair_highlights,
    day_cell, event_detail, initial_view_date, month_window, navigation, pair_detail_for_date,
    project_events,
};
use serde::Serialize;
use time::Date;

/// Locale used when the user's profile names none.
pub const DEFAULT_LOCALE: &str = "en";

/// Which staff member the calendar is focused on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "staffId", rename_all = "camelCase")]
pub enum Selection {
    /// Nothing is loaded, or the roster is empty.
    #[default]
    NoStaff,
    /// The focal staff member.
    StaffSelected(String),
}

impl Selection {
    /// The focal staff id, if any.
    #[must_use]
    pub fn staff_id(&self) -> Option<&str> {
        match self {
            Self::NoStaff => None,
            Self::StaffSelected(id) => Some(id.as_str()),
        }
    }
}

/// A legend entry: one staff member and their color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffColor {
    /// Staff identifier.
    pub staff_id: String,
    /// Display name.
    pub name: String,
    /// Assigned color.
    pub color: Color,
}

/// Everything a month-grid renderer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    /// Locale tag for month and weekday names.
    pub locale: String,
    /// The current focal staff selection.
    pub selection: Selection,
    /// The schedule's day range, if it is valid.
    pub schedule_range: Option<DateRange>,
    /// The visible month.
    pub window: Option<DateRange>,
    /// Whether the visible month can move.
    pub navigation: Navigation,
    /// Events of the focal staff member.
    pub events: Vec<CalendarEvent>,
    /// Off-days of the focal staff member.
    pub off_days: DaySet,
    /// Pairing days of the focal staff member, with partner colors.
    pub pair_highlights: HighlightMap,
    /// Roster colors in roster order.
    pub staff_colors: Vec<StaffColor>,
}

/// The calendar's complete state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    schedule: Option<Schedule>,
    zone: ReferenceZone,
    locale: String,
    selection: Selection,
    view_date: Option<Date>,
    colors: ColorMap,
    view: CalendarView,
}

impl CalendarState {
    /// Creates an empty state.
    ///
    /// # Arguments
    ///
    /// * `zone` - The zone in which instants become calendar days
    /// * `locale` - The renderer locale; empty selects [`DEFAULT_LOCALE`]
    #[must_use]
    pub fn new(zone: ReferenceZone, locale: &str) -> Self {
        let locale: String = if locale.trim().is_empty() {
            DEFAULT_LOCALE.to_string()
        } else {
            locale.trim().to_string()
        };

        let mut state: Self = Self {
            schedule: None,
            zone,
            locale,
            selection: Selection::NoStaff,
            view_date: None,
            colors: ColorMap::default(),
            view: CalendarView::default(),
        };
        state.rebuild();
        state
    }

    /// The loaded schedule.
    #[must_use]
    pub const fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    /// The reference zone.
    #[must_use]
    pub const fn zone(&self) -> &ReferenceZone {
        &self.zone
    }

    /// The renderer locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The focal staff selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// A day inside the visible month.
    #[must_use]
    pub const fn view_date(&self) -> Option<Date> {
        self.view_date
    }

    /// The colors of the loaded schedule.
    #[must_use]
    pub const fn colors(&self) -> &ColorMap {
        &self.colors
    }

    /// The derived view.
    #[must_use]
    pub const fn view(&self) -> &CalendarView {
        &self.view
    }

    /// The schedule's day range, if a schedule with a valid range is loaded.
    #[must_use]
    pub fn date_range(&self) -> Option<DateRange> {
        self.schedule
            .as_ref()
            .and_then(|schedule| schedule.date_range(&self.zone))
    }

    /// The click detail of the event for `assignment_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No schedule is loaded
    /// - The focal staff member has no event for the assignment
    /// - An instant cannot be converted to the reference zone
    pub fn event_detail(&self, assignment_id: &str) -> Result<EventDetail, CoreError> {
        if self.schedule.is_none() {
            return Err(CoreError::NoScheduleLoaded);
        }

        let event: &CalendarEvent = self
            .view
            .events
            .iter()
            .find(|event| event.id == assignment_id)
            .ok_or_else(|| CoreError::AssignmentNotFound(assignment_id.to_string()))?;

        event_detail(event, &self.zone).map_err(CoreError::from)
    }

    /// The pairing that covers `day` for the focal staff member.
    ///
    /// # Errors
    ///
    /// Returns an error if no schedule is loaded.
    pub fn pair_detail(&self, day: Date) -> Result<Option<PairDetail>, CoreError> {
        let schedule: &Schedule = self.schedule.as_ref().ok_or(CoreError::NoScheduleLoaded)?;

        Ok(self.selection.staff_id().and_then(|focal| {
            pair_detail_for_date(&schedule.staffs, focal, day, &self.colors)
        }))
    }

    /// How the renderer should mark `day`.
    #[must_use]
    pub fn day_cell(&self, day: Date) -> DayCell {
        day_cell(
            day,
            self.view.schedule_range.as_ref(),
            &self.view.off_days,
            &self.view.pair_highlights,
        )
    }

    pub(crate) fn load(&mut self, schedule: Schedule) {
        let range: Option<DateRange> = schedule.date_range(&self.zone);

        let keep_selection: bool = self
            .selection
            .staff_id()
            .is_some_and(|id| schedule.staff(id).is_some());
        if !keep_selection {
            self.selection = schedule
                .first_staff()
                .map_or(Selection::NoStaff, |staff| {
                    Selection::StaffSelected(staff.id.clone())
                });
        }

        let keep_view_date: bool = self
            .view_date
            .zip(range)
            .is_some_and(|(day, range)| month_window(day).intersect(&range).is_some());
        if !keep_view_date {
            self.view_date = initial_view_date(&schedule, &self.zone);
        }

        self.colors = ColorMap::new(&schedule.staffs, &schedule.shifts);
        self.schedule = Some(schedule);
        self.rebuild();
    }

    pub(crate) fn select(&mut self, staff_id: String) {
        self.selection = Selection::StaffSelected(staff_id);
        self.rebuild();
    }

    pub(crate) fn show(&mut self, day: Date) {
        self.view_date = Some(day);
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.view = self.build_view();
    }

    fn build_view(&self) -> CalendarView {
        let Some(schedule) = self.schedule.as_ref() else {
            return CalendarView {
                locale: self.locale.clone(),
                ..CalendarView::default()
            };
        };

        let focal: Option<&str> = self.selection.staff_id();
        let schedule_range: Option<DateRange> = schedule.date_range(&self.zone);
        let window: Option<DateRange> = self.view_date.map(month_window);

        let projection: ScheduleProjection =
            project_events(schedule, focal, &self.colors, &self.zone);
        let pair_highlights: HighlightMap = compute_pair_highlights(
            &schedule.staffs,
            focal,
            schedule_range.as_ref(),
            &self.colors,
        );
        let staff_colors: Vec<StaffColor> = self
            .colors
            .staff_colors()
            .map(|(staff_id, color)| StaffColor {
                staff_id: staff_id.to_string(),
                name: schedule
                    .staff(staff_id)
                    .map(|staff| staff.name.clone())
                    .unwrap_or_default(),
                color,
            })
            .collect();

        CalendarView {
            locale: self.locale.clone(),
            selection: self.selection.clone(),
            schedule_range,
            window,
            navigation: window
                .map(|window| navigation(&window, schedule_range.as_ref()))
                .unwrap_or_default(),
            events: projection.events,
            off_days: projection.off_days,
            pair_highlights,
            staff_colors,
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: CalendarState,
    /// The action to send to the schedule store, if any.
    pub action: Option<ScheduleAction>,
}
