//! Frame rendering: the month grid, the event overlay, and the HH:MM clock.
//!
//! All three passes mutate a caller-owned [`Frame`] through the serpentine
//! coordinate mapper; none perform I/O and none can fail. Anomalous inputs
//! (days outside the laid-out month, invalid digits) paint nothing.

use smart_leds::{RGB8, colors};

use crate::{
    calendar::{DateSnapshot, DayKind, DayMap, MonthWalk, month_indicator_cell},
    events::EventRecord,
    frame::Frame,
    glyphs::digit_glyph,
    layout::SerpentinePanel,
};

/// Horizontal glyph offsets for hour tens, hour units, minute tens, minute
/// units. Chosen so the clock occupies columns the month grid never touches.
const CLOCK_DIGIT_OFFSETS: [usize; 4] = [16, 20, 24, 28];

/// The colors of everything the renderer paints.
///
/// [`Palette::DEFAULT`] reproduces the appliance's original look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Ordinary days of the month grid.
    pub weekday: RGB8,
    /// Weekend days of the month grid.
    pub weekend: RGB8,
    /// The current day-of-month.
    pub today: RGB8,
    /// Plain event markers.
    pub event: RGB8,
    /// Holiday event markers.
    pub holiday: RGB8,
    /// The per-month indicator cell.
    pub month_indicator: RGB8,
    /// Clock digits: hour tens, hour units, minute tens, minute units.
    pub clock: [RGB8; 4],
}

impl Palette {
    /// The appliance's original colors.
    pub const DEFAULT: Self = Self {
        weekday: colors::RED,
        weekend: colors::BLUE,
        today: colors::GREEN,
        event: colors::CYAN,
        holiday: colors::YELLOW,
        month_indicator: colors::BLUE,
        clock: [colors::RED, colors::GREEN, colors::BLUE, colors::VIOLET],
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Paints calendar, events, and clock onto a `W`×`H` serpentine panel frame
/// of `N = W * H` pixels.
pub struct PanelRenderer<const N: usize, const W: usize, const H: usize> {
    palette: Palette,
}

impl<const N: usize, const W: usize, const H: usize> PanelRenderer<N, W, H> {
    /// Create a renderer with the given colors.
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        assert!(W * H == N, "width * height must equal N");
        Self { palette }
    }

    /// The colors this renderer paints with.
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    fn set(frame: &mut Frame<N>, x: usize, y: usize, color: RGB8) {
        frame[SerpentinePanel::<N, W, H>::pixel_index(x, y)] = color;
    }

    /// Paint the month grid and the month-indicator cell.
    ///
    /// Returns a fresh day-to-pixel table for `date`'s month. The table
    /// replaces any table from a previous cycle; stale tables must never be
    /// consulted after the month or day changes.
    pub fn render_calendar(&self, frame: &mut Frame<N>, date: &DateSnapshot) -> DayMap {
        let mut day_map = DayMap::new();
        for cell in MonthWalk::new(date.year, date.month, date.day, date.weekday) {
            let pixel_index =
                SerpentinePanel::<N, W, H>::pixel_index(usize::from(cell.x), usize::from(cell.y));
            day_map.record(pixel_index);
            frame[pixel_index] = match cell.kind {
                DayKind::Today => self.palette.today,
                DayKind::Weekend => self.palette.weekend,
                DayKind::Weekday => self.palette.weekday,
            };
        }
        if let Some((x, y)) = month_indicator_cell(date.month) {
            Self::set(frame, usize::from(x), usize::from(y), self.palette.month_indicator);
        }
        day_map
    }

    /// Recolor the day cells named by `events`, via the day-to-pixel table
    /// produced by [`Self::render_calendar`] in the same cycle.
    ///
    /// Markers whose day failed to parse or falls outside the laid-out month
    /// are skipped.
    pub fn render_events(
        &self,
        frame: &mut Frame<N>,
        events: impl IntoIterator<Item = EventRecord>,
        day_map: &DayMap,
    ) {
        for record in events {
            let Some(day) = record.day else { continue };
            let Some(pixel_index) = day_map.pixel(day) else {
                continue;
            };
            frame[pixel_index] = if record.is_holiday {
                self.palette.holiday
            } else {
                self.palette.event
            };
        }
    }

    /// Paint HH:MM as four digits at the fixed clock offsets.
    ///
    /// The clock region is disjoint from the month grid by construction of
    /// the offsets, so this pass never disturbs calendar pixels.
    pub fn render_clock(&self, frame: &mut Frame<N>, hour: u8, minute: u8) {
        let digits = [hour / 10, hour % 10, minute / 10, minute % 10];
        for (index, digit) in digits.into_iter().enumerate() {
            self.paint_digit(frame, CLOCK_DIGIT_OFFSETS[index], digit, self.palette.clock[index]);
        }
    }

    /// Illuminate the cells of `digit`'s glyph at the given horizontal
    /// offset. Digits outside 0–9 paint nothing.
    pub fn paint_digit(&self, frame: &mut Frame<N>, offset: usize, digit: u8, color: RGB8) {
        let Some(glyph) = digit_glyph(digit) else {
            return;
        };
        for &(dx, dy) in glyph.dots {
            Self::set(frame, offset + usize::from(dx), usize::from(dy), color);
        }
    }
}
