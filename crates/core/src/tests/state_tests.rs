// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_empty_state, create_loaded_state};
use crate::{CalendarState, CoreError, DEFAULT_LOCALE, StaffColor};
use rota_calendar_domain::{DateRange, DayCell, EventDetail, PairDetail, ReferenceZone};
use time::macros::date;

#[test]
fn test_blank_locale_uses_default() {
    let state: CalendarState = CalendarState::new(ReferenceZone::utc(), "  ");
    assert_eq!(state.locale(), DEFAULT_LOCALE);
}

#[test]
fn test_view_window_opens_on_schedule_start() {
    let state: CalendarState = create_loaded_state();

    assert_eq!(state.view_date(), Some(date!(2024 - 03 - 01)));
    let window: DateRange = state.view().window.unwrap();
    assert_eq!(window.start(), date!(2024 - 03 - 01));
    assert_eq!(window.end(), date!(2024 - 03 - 31));
    assert!(!state.view().navigation.can_go_earlier);
    assert!(!state.view().navigation.can_go_later);
}

#[test]
fn test_staff_colors_follow_roster() {
    let state: CalendarState = create_loaded_state();

    let legend: &[StaffColor] = &state.view().staff_colors;
    let names: Vec<&str> = legend.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, vec!["Ayla", "Berk", "Cem"]);
    assert_eq!(legend[1].color, state.colors().staff_color("B"));
}

#[test]
fn test_event_detail_for_focal_event() {
    let state: CalendarState = create_loaded_state();

    let detail: EventDetail = state.event_detail("as-1").unwrap();

    assert_eq!(detail.staff_name, "Ayla");
    assert_eq!(detail.shift_name, "Day");
    assert_eq!(detail.date, "05.03.2024");
    assert_eq!(detail.start_time, "09:00");
    assert_eq!(detail.end_time, "17:00");
}

#[test]
fn test_event_detail_outside_view_rejected() {
    let state: CalendarState = create_loaded_state();

    assert_eq!(
        state.event_detail("as-2").unwrap_err(),
        CoreError::AssignmentNotFound(String::from("as-2"))
    );
    assert_eq!(
        create_empty_state().event_detail("as-1").unwrap_err(),
        CoreError::NoScheduleLoaded
    );
}

#[test]
fn test_pair_detail_for_focal_staff() {
    let state: CalendarState = create_loaded_state();

    let detail: PairDetail = state.pair_detail(date!(2024 - 03 - 02)).unwrap().unwrap();
    assert_eq!(detail.pair_staff_name, "Berk");
    assert_eq!(detail.start_date, "01.03.2024");
    assert_eq!(detail.end_date, "03.03.2024");

    assert_eq!(state.pair_detail(date!(2024 - 03 - 04)).unwrap(), None);
    assert_eq!(
        create_empty_state()
            .pair_detail(date!(2024 - 03 - 02))
            .unwrap_err(),
        CoreError::NoScheduleLoaded
    );
}

#[test]
fn test_day_cells() {
    let state: CalendarState = create_loaded_state();

    let paired: DayCell = state.day_cell(date!(2024 - 03 - 01));
    assert!(paired.in_range);
    assert_eq!(paired.pair_color, Some(state.colors().staff_color("B")));

    let off: DayCell = state.day_cell(date!(2024 - 03 - 08));
    assert!(off.off_day);
    assert_eq!(off.pair_color, None);

    let outside: DayCell = state.day_cell(date!(2024 - 02 - 29));
    assert!(!outside.in_range);
}

#[test]
fn test_view_serializes_for_renderer() {
    let state: CalendarState = create_loaded_state();

    let json: serde_json::Value = serde_json::to_value(state.view()).unwrap();

    assert_eq!(json["locale"], "tr");
    assert_eq!(json["selection"]["staffId"], "A");
    assert_eq!(json["scheduleRange"]["start"], "2024-03-01");
    assert_eq!(json["window"]["end"], "2024-03-31");
    assert_eq!(json["navigation"]["canGoLater"], false);
    assert_eq!(json["events"][0]["title"], "Day");
    assert_eq!(json["offDays"][0], "08-03-2024");
    assert!(json["pairHighlights"]["01-03-2024"].is_string());
    assert_eq!(json["staffColors"][2]["name"], "Cem");
}
