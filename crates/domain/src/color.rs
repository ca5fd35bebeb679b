// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Deterministic display colors for staff and shifts.
//!
//! ## Invariants
//!
//! - A staff color depends only on the staff member's position in the roster
//! - Every staff palette entry keeps white text at a contrast ratio >= 4.5:1
//! - A shift accent depends only on the shift identifier (no time salting)
//! - Both tables are built once per schedule load in a [`ColorMap`]

use crate::types::{Shift, Staff};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Number of entries in the staff palette.
pub const STAFF_PALETTE_LEN: usize = 24;

/// Color returned for identifiers that are not on the roster.
pub const FALLBACK_COLOR: Color = Color::rgb(0x1a, 0x7f, 0x83);

/// Minimum contrast ratio against white text (WCAG AA, normal text).
pub const MIN_CONTRAST_RATIO: f64 = 4.5;

const PALETTE_HUE_STEP: usize = 360 / STAFF_PALETTE_LEN;
// Coprime with the palette length, so every hue is visited once and roster
// neighbours sit 75 degrees apart.
const PALETTE_STRIDE: usize = 5;
const PALETTE_SATURATION: f64 = 0.75;
const PALETTE_START_LIGHTNESS: f64 = 0.45;
const PALETTE_MIN_LIGHTNESS: f64 = 0.10;
const PALETTE_LIGHTNESS_STEP: f64 = 0.01;

const ACCENT_SATURATION: f64 = 0.90;
const ACCENT_LIGHTNESS: f64 = 0.50;

const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

static STAFF_PALETTE: LazyLock<Vec<Color>> = LazyLock::new(|| {
    (0..STAFF_PALETTE_LEN)
        .map(|index| {
            let hue: usize = (index * PALETTE_STRIDE % STAFF_PALETTE_LEN) * PALETTE_HUE_STEP;
            #[allow(clippy::cast_precision_loss)]
            let hue: f64 = hue as f64;
            readable_on_white(hue, PALETTE_SATURATION, PALETTE_START_LIGHTNESS)
        })
        .collect()
});

/// An sRGB display color, written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from hue (degrees), saturation and lightness (0..=1).
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::many_single_char_names
    )]
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h: f64 = hue.rem_euclid(360.0) / 60.0;
        let s: f64 = saturation.clamp(0.0, 1.0);
        let l: f64 = lightness.clamp(0.0, 1.0);

        let chroma: f64 = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
        let x: f64 = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let m: f64 = l - chroma / 2.0;

        let (r, g, b) = match h {
            h if h < 1.0 => (chroma, x, 0.0),
            h if h < 2.0 => (x, chroma, 0.0),
            h if h < 3.0 => (0.0, chroma, x),
            h if h < 4.0 => (0.0, x, chroma),
            h if h < 5.0 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }

    /// Red channel.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.r
    }

    /// Green channel.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.b
    }

    /// WCAG relative luminance, 0 (black) to 1 (white).
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        let linear = |channel: u8| {
            let c: f64 = f64::from(channel) / 255.0;
            if c <= 0.040_45 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };

        0.0722f64.mul_add(
            linear(self.b),
            0.2126f64.mul_add(linear(self.r), 0.7152 * linear(self.g)),
        )
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// WCAG contrast ratio between two colors, from 1 to 21.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Darkens an HSL color until white text on it is readable.
fn readable_on_white(hue: f64, saturation: f64, lightness: f64) -> Color {
    let mut lightness: f64 = lightness;
    let mut color: Color = Color::from_hsl(hue, saturation, lightness);

    while contrast_ratio(color, WHITE) < MIN_CONTRAST_RATIO && lightness > PALETTE_MIN_LIGHTNESS {
        lightness -= PALETTE_LIGHTNESS_STEP;
        color = Color::from_hsl(hue, saturation, lightness);
    }

    color
}

/// The fixed staff palette, in assignment order.
#[must_use]
pub fn staff_palette() -> &'static [Color] {
    &STAFF_PALETTE
}

/// The palette color for the staff member at roster position `index`.
#[must_use]
pub fn palette_color(index: usize) -> Color {
    let palette: &[Color] = staff_palette();
    palette[index % palette.len()]
}

/// The display color of `staff_id` within `staff`.
///
/// Unknown identifiers get [`FALLBACK_COLOR`].
#[must_use]
pub fn staff_color(staff: &[Staff], staff_id: &str) -> Color {
    staff
        .iter()
        .position(|member| member.id == staff_id)
        .map_or(FALLBACK_COLOR, palette_color)
}

/// The accent color of a shift.
///
/// The hue is the sum of the identifier's character codes modulo 360.
#[must_use]
pub fn shift_accent_color(shift_id: &str) -> Color {
    let hue: u32 = shift_id
        .chars()
        .fold(0_u32, |acc, c| (acc + u32::from(c)) % 360);
    Color::from_hsl(f64::from(hue), ACCENT_SATURATION, ACCENT_LIGHTNESS)
}

/// Staff and shift colors for one loaded schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    roster: Vec<String>,
    staff: HashMap<String, Color>,
    accents: HashMap<String, Color>,
}

impl ColorMap {
    /// Builds the color tables for a roster and its shifts.
    ///
    /// A staff id that appears twice keeps the color of its first position.
    #[must_use]
    pub fn new(staff: &[Staff], shifts: &[Shift]) -> Self {
        let mut roster: Vec<String> = Vec::with_capacity(staff.len());
        let mut staff_colors: HashMap<String, Color> = HashMap::with_capacity(staff.len());

        for (index, member) in staff.iter().enumerate() {
            if !staff_colors.contains_key(&member.id) {
                staff_colors.insert(member.id.clone(), palette_color(index));
                roster.push(member.id.clone());
            }
        }

        let accents: HashMap<String, Color> = shifts
            .iter()
            .map(|shift| (shift.id.clone(), shift_accent_color(&shift.id)))
            .collect();

        Self {
            roster,
            staff: staff_colors,
            accents,
        }
    }

    /// The color of `staff_id`, or [`FALLBACK_COLOR`] if it is not on the roster.
    #[must_use]
    pub fn staff_color(&self, staff_id: &str) -> Color {
        self.staff.get(staff_id).copied().unwrap_or(FALLBACK_COLOR)
    }

    /// The accent color of `shift_id`.
    ///
    /// Shifts missing from the schedule are computed on the fly; the result
    /// is the same either way.
    #[must_use]
    pub fn accent_color(&self, shift_id: &str) -> Color {
        self.accents
            .get(shift_id)
            .copied()
            .unwrap_or_else(|| shift_accent_color(shift_id))
    }

    /// Staff ids with their colors, in roster order.
    pub fn staff_colors(&self) -> impl Iterator<Item = (&str, Color)> {
        self.roster
            .iter()
            .map(|id| (id.as_str(), self.staff_color(id)))
    }

    /// Number of staff with an assigned color.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    /// Whether no staff colors are assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}
