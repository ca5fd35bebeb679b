// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-keyed collections handed to the renderer.
//!
//! Both are ordered by day and serialize with `DD-MM-YYYY` keys.

use crate::color::Color;
use crate::dates::{format_day_key, parse_day_key};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// Days on which the focal staff is paired, with the partner's color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightMap {
    days: BTreeMap<Date, Color>,
}

impl HighlightMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `color` for `day`, returning the color it replaced.
    pub fn insert(&mut self, day: Date, color: Color) -> Option<Color> {
        self.days.insert(day, color)
    }

    /// The color for `day`.
    #[must_use]
    pub fn get(&self, day: Date) -> Option<Color> {
        self.days.get(&day).copied()
    }

    /// The color for a `DD-MM-YYYY` key.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<Color> {
        parse_day_key(key).and_then(|day| self.get(day))
    }

    /// Whether a `DD-MM-YYYY` key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get_key(key).is_some()
    }

    /// The keys in ascending day order, as `DD-MM-YYYY`.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.days.keys().copied().map(format_day_key).collect()
    }

    /// Iterates days and colors in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, Color)> + '_ {
        self.days.iter().map(|(day, color)| (*day, *color))
    }

    /// Number of highlighted days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no day is highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Serialize for HighlightMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, color) in &self.days {
            map.serialize_entry(&format_day_key(*day), color)?;
        }
        map.end()
    }
}

/// A set of highlighted days (off-days).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaySet {
    days: BTreeSet<Date>,
}

impl DaySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a day; returns whether it was newly added.
    pub fn insert(&mut self, day: Date) -> bool {
        self.days.insert(day)
    }

    /// Whether `day` is in the set.
    #[must_use]
    pub fn contains(&self, day: Date) -> bool {
        self.days.contains(&day)
    }

    /// Whether a `DD-MM-YYYY` key is in the set.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        parse_day_key(key).is_some_and(|day| self.contains(day))
    }

    /// The days in ascending order, as `DD-MM-YYYY`.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.days.iter().copied().map(format_day_key).collect()
    }

    /// Iterates days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Date> + '_ {
        self.days.iter().copied()
    }

    /// Number of days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl FromIterator<Date> for DaySet {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

impl Serialize for DaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.days.len()))?;
        for day in &self.days {
            seq.serialize_element(&format_day_key(*day))?;
        }
        seq.end()
    }
}
