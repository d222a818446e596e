//! Calendar geometry: leap years, month lengths, and the month-grid walk.
//!
//! The month grid starts at a fixed anchor cell and snakes across the panel
//! seven days per column, exactly reproducing the appliance's layout: the
//! weekday of day 1 is derived by *back-counting* a rotating weekday counter
//! from today's weekday (no calendar epoch arithmetic), and Saturdays
//! (counter value 6) end a column. The counter value 0 also takes the
//! weekend color without ending a column; that branch is preserved
//! deliberately so existing panels keep their exact appearance.

use heapless::Vec;

use time::OffsetDateTime;

/// Where day 1 of the month grid is painted.
const GRID_ANCHOR: (u8, u8) = (7, 6);

/// One fixed indicator cell per month, January through December.
const MONTH_INDICATOR_CELLS: [(u8, u8); 12] = [
    (10, 2),
    (11, 2),
    (12, 2),
    (13, 2),
    (3, 1),
    (4, 1),
    (5, 1),
    (6, 1),
    (7, 1),
    (8, 1),
    (9, 1),
    (10, 1),
];

/// True iff `year` is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1–12) of `year`.
#[must_use]
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// The `(x, y)` indicator cell for `month` (1–12), `None` otherwise.
#[must_use]
pub const fn month_indicator_cell(month: u8) -> Option<(u8, u8)> {
    if month >= 1 && month <= 12 {
        Some(MONTH_INDICATOR_CELLS[(month - 1) as usize])
    } else {
        None
    }
}

/// How a day cell is colored in the month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DayKind {
    /// The current day-of-month.
    Today,
    /// A weekend cell (rotating counter at 0 or 6).
    Weekend,
    /// Any other day.
    Weekday,
}

/// One placed day of the month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DayCell {
    /// Day-of-month, 1-based.
    pub day: u8,
    /// Panel column.
    pub x: u8,
    /// Panel row.
    pub y: u8,
    /// Coloring class for this cell.
    pub kind: DayKind,
}

/// Iterator placing every day of a month on the panel grid.
///
/// Yields one [`DayCell`] per day, in day order. The walk is deterministic:
/// the same `(year, month, day, weekday)` inputs always produce the same
/// sequence.
#[derive(Clone, Debug)]
pub struct MonthWalk {
    days: u8,
    today: u8,
    next_day: u8,
    x: u8,
    y: u8,
    z: u8,
}

impl MonthWalk {
    /// Start a walk of `month`/`year`, where `day` is today's day-of-month
    /// and `weekday` is today's weekday (0 = Sunday … 6 = Saturday).
    #[must_use]
    pub fn new(year: u16, month: u8, day: u8, weekday: u8) -> Self {
        // Back-count the rotating weekday counter from today to day 1.
        let mut z = weekday % 7;
        let mut i = day;
        while i > 1 {
            z = if z == 0 { 6 } else { z - 1 };
            i -= 1;
        }
        Self {
            days: days_in_month(year, month),
            today: day,
            next_day: 1,
            x: GRID_ANCHOR.0,
            y: GRID_ANCHOR.1,
            z,
        }
    }
}

impl Iterator for MonthWalk {
    type Item = DayCell;

    fn next(&mut self) -> Option<DayCell> {
        if self.next_day > self.days {
            return None;
        }
        let day = self.next_day;
        let (x, y) = (self.x, self.y);

        let kind = if self.z == 6 {
            // Saturday ends the column; the next day starts one row up.
            self.x = self.x.saturating_sub(6);
            self.y = self.y.saturating_sub(1);
            self.z = 0;
            if day == self.today {
                DayKind::Today
            } else {
                DayKind::Weekend
            }
        } else {
            let kind = if day == self.today {
                DayKind::Today
            } else if self.z == 0 {
                // Counter value 0 colors as weekend without ending the
                // column. Kept as-is: fielded panels rely on this layout.
                DayKind::Weekend
            } else {
                DayKind::Weekday
            };
            self.x = self.x.saturating_add(1);
            self.z += 1;
            kind
        };

        self.next_day += 1;
        Some(DayCell { day, x, y, kind })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.days.saturating_sub(self.next_day.saturating_sub(1)));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthWalk {}

/// Per-render-cycle mapping from day-of-month to the LED index where that
/// day was painted.
///
/// Valid only for the month it was built from; a new table is produced by
/// every calendar pass and must replace, not extend, the previous one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DayMap {
    pixels: Vec<u16, 31>,
}

impl DayMap {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { pixels: Vec::new() }
    }

    /// Append the pixel index for the next day in sequence.
    pub(crate) fn record(&mut self, pixel_index: usize) {
        // Capacity is 31, the longest month; extra entries are dropped.
        let _ = self.pixels.push(pixel_index as u16);
    }

    /// The LED index for `day`, or `None` when `day` was not laid out.
    ///
    /// Day 0 (the classic marker for a failed numeric parse) and days past
    /// the end of the month are both `None`, so overlay passes degrade to
    /// no-ops instead of repainting arbitrary pixels.
    #[must_use]
    pub fn pixel(&self, day: u8) -> Option<usize> {
        if day == 0 {
            return None;
        }
        self.pixels.get(usize::from(day) - 1).map(|&p| usize::from(p))
    }

    /// Number of days laid out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when no days have been laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// The time-source snapshot a render cycle works from.
///
/// Captured once per cycle and never re-queried mid-cycle. `weekday` follows
/// the appliance convention 0 = Sunday … 6 = Saturday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateSnapshot {
    /// Gregorian year.
    pub year: u16,
    /// Month, 1–12.
    pub month: u8,
    /// Day-of-month, 1-based.
    pub day: u8,
    /// Weekday, 0 = Sunday … 6 = Saturday.
    pub weekday: u8,
    /// Hour of day, 0–23.
    pub hour: u8,
    /// Minute, 0–59.
    pub minute: u8,
}

impl DateSnapshot {
    /// Capture a snapshot from an already-localized wall-clock time.
    #[must_use]
    pub fn from_local(local: &OffsetDateTime) -> Self {
        Self {
            year: local.year().clamp(0, i32::from(u16::MAX)) as u16,
            month: u8::from(local.month()),
            day: local.day(),
            weekday: local.weekday().number_days_from_sunday(),
            hour: local.hour(),
            minute: local.minute(),
        }
    }

    /// The snapshot shifted one month forward, clamping the day to the
    /// target month and carrying the year.
    #[must_use]
    pub fn advance_month(&self) -> Self {
        let (year, month) = if self.month >= 12 {
            (self.year.saturating_add(1), 1)
        } else {
            (self.year, self.month + 1)
        };
        self.reanchored(year, month, i32::from(days_in_month(self.year, self.month)))
    }

    /// The snapshot shifted one month back, clamping the day to the target
    /// month and carrying the year.
    #[must_use]
    pub fn retreat_month(&self) -> Self {
        let (year, month) = if self.month <= 1 {
            (self.year.saturating_sub(1), 12)
        } else {
            (self.year, self.month - 1)
        };
        self.reanchored(year, month, -i32::from(days_in_month(year, month)))
    }

    /// Move to `year`/`month`, recomputing the weekday from the days
    /// actually elapsed (`month_step_days` plus any day clamping).
    fn reanchored(&self, year: u16, month: u8, month_step_days: i32) -> Self {
        let day = self.day.min(days_in_month(year, month)).max(1);
        let elapsed = month_step_days + i32::from(day) - i32::from(self.day);
        let weekday = (i32::from(self.weekday % 7) + elapsed).rem_euclid(7) as u8;
        Self {
            year,
            month,
            day,
            weekday,
            ..*self
        }
    }
}
