// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pair highlight computation.
//!
//! A pair record lives on one staff member's `pair_list` but links both
//! people. Every record is therefore read from both sides before filtering
//! for the focal staff member.
//!
//! ## Invariants
//!
//! - Highlights only cover days inside the schedule range
//! - Records with malformed or reversed bounds are skipped
//! - When intervals from different partners overlap, the later entry wins

use crate::color::{Color, ColorMap};
use crate::dates::{DateRange, format_as_stored};
use crate::highlights::HighlightMap;
use crate::types::{PairRange, Staff};
use serde::Serialize;
use time::Date;

/// Display name used when a partner is not on the roster.
pub const UNKNOWN_PARTNER_NAME: &str = "Unknown";

/// One side of a pair record.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PairEntry<'a> {
    /// The staff member who sees this pairing.
    observer: &'a str,
    /// The color of the other side.
    partner_color: Color,
    interval: DateRange,
}

/// Reads every pair record from both sides.
fn pair_entries<'a>(staff: &'a [Staff], colors: &ColorMap) -> Vec<PairEntry<'a>> {
    let mut entries: Vec<PairEntry<'a>> = Vec::new();

    for owner in staff {
        for pair in owner.pairs() {
            let Some(interval) = pair.interval() else {
                continue;
            };

            entries.push(PairEntry {
                observer: &owner.id,
                partner_color: colors.staff_color(&pair.staff_id),
                interval,
            });
            entries.push(PairEntry {
                observer: &pair.staff_id,
                partner_color: colors.staff_color(&owner.id),
                interval,
            });
        }
    }

    entries
}

/// Computes the pairing days of `focal` within `range`.
///
/// The result maps each paired day to the partner's color. It is empty when
/// there is no focal staff member, no roster, no schedule range or no
/// overlapping interval.
#[must_use]
pub fn compute_pair_highlights(
    staff: &[Staff],
    focal: Option<&str>,
    range: Option<&DateRange>,
    colors: &ColorMap,
) -> HighlightMap {
    let mut highlights: HighlightMap = HighlightMap::new();

    let (Some(focal), Some(range)) = (focal, range) else {
        return highlights;
    };

    for entry in pair_entries(staff, colors)
        .into_iter()
        .filter(|entry| entry.observer == focal)
    {
        let Some(visible) = entry.interval.intersect(range) else {
            continue;
        };
        for day in visible.days() {
            highlights.insert(day, entry.partner_color);
        }
    }

    highlights
}

/// Details of the pairing that covers one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairDetail {
    /// The partner's display name.
    pub pair_staff_name: String,
    /// The partner's color.
    pub pair_staff_color: Color,
    /// First day of the pair interval (`DD.MM.YYYY`).
    pub start_date: String,
    /// Last day of the pair interval (`DD.MM.YYYY`).
    pub end_date: String,
    /// The day that was asked about (`DD.MM.YYYY`).
    pub date: String,
}

/// Finds the pairing that covers `day` for `focal`.
///
/// The focal staff member's own records are searched first, then records on
/// other staff members that name `focal` as the partner.
#[must_use]
pub fn pair_detail_for_date(
    staff: &[Staff],
    focal: &str,
    day: Date,
    colors: &ColorMap,
) -> Option<PairDetail> {
    let covering = |pair: &PairRange| pair.interval().filter(|interval| interval.contains(day));
    let name_of = |staff_id: &str| {
        staff
            .iter()
            .find(|member| member.id == staff_id)
            .map(|member| member.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_PARTNER_NAME)
            .to_string()
    };
    let detail = |partner_id: &str, interval: DateRange| PairDetail {
        pair_staff_name: name_of(partner_id),
        pair_staff_color: colors.staff_color(partner_id),
        start_date: format_as_stored(interval.start()),
        end_date: format_as_stored(interval.end()),
        date: format_as_stored(day),
    };

    let own = staff
        .iter()
        .find(|member| member.id == focal)
        .into_iter()
        .flat_map(Staff::pairs)
        .find_map(|pair| covering(pair).map(|interval| detail(pair.staff_id.as_str(), interval)));

    own.or_else(|| {
        staff
            .iter()
            .filter(|member| member.id != focal)
            .flat_map(|member| member.pairs().iter().map(move |pair| (member, pair)))
            .filter(|(_, pair)| pair.staff_id == focal)
            .find_map(|(member, pair)| covering(pair).map(|interval| detail(member.id.as_str(), interval)))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_entries_emits_both_sides() {
        let mut a: Staff = Staff::new("A", "Ayla");
        a.pair_list = Some(vec![PairRange::new("B", "01.03.2024", "03.03.2024")]);
        let staff: Vec<Staff> = vec![a, Staff::new("B", "Berk")];
        let colors: ColorMap = ColorMap::new(&staff, &[]);

        let entries: Vec<PairEntry<'_>> = pair_entries(&staff, &colors);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].observer, "A");
        assert_eq!(entries[0].partner_color, colors.staff_color("B"));
        assert_eq!(entries[1].observer, "B");
        assert_eq!(entries[1].partner_color, colors.staff_color("A"));
    }

    #[test]
    fn test_pair_entries_skips_invalid_intervals() {
        let mut a: Staff = Staff::new("A", "Ayla");
        a.pair_list = Some(vec![
            PairRange::new("B", "", "03.03.2024"),
            PairRange::new("B", "05.03.2024", "01.03.2024"),
            PairRange::new("B", "01-03-2024", "03.03.2024"),
        ]);
        let staff: Vec<Staff> = vec![a, Staff::new("B", "Berk")];
        let colors: ColorMap = ColorMap::new(&staff, &[]);

        assert!(pair_entries(&staff, &colors).is_empty());
    }
}
