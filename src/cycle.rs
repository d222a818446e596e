//! One render cycle of the appliance, plus manual-adjust command intake.
//!
//! The surrounding driver loop owns all I/O: it fetches the event text,
//! snapshots the time source, reads command bytes, and hands finished frames
//! to the display. [`CalendarClock`] is what it drives: a single synchronous,
//! run-to-completion render cycle over an exclusively-owned frame buffer.
//! Cycles never suspend, never block, and never fail.

use crate::{
    Error, PanelFrame, Renderer,
    calendar::DateSnapshot,
    events::parse,
    render::Palette,
};

/// A manual-adjust signal from the command intake collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Show the following month (`+`).
    AdvanceMonth,
    /// Show the preceding month (`-`).
    RetreatMonth,
    /// Re-synchronize with the time source and re-render (`0`).
    Resync,
}

impl TryFrom<u8> for Command {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self, Error> {
        match byte {
            b'+' => Ok(Self::AdvanceMonth),
            b'-' => Ok(Self::RetreatMonth),
            b'0' => Ok(Self::Resync),
            other => Err(Error::UnknownCommand(other)),
        }
    }
}

impl Command {
    /// Apply a month-adjust command to a date snapshot.
    ///
    /// [`Command::Resync`] returns `None`: the caller must take a fresh
    /// snapshot from the time source instead of deriving one.
    #[must_use]
    pub fn adjusted(self, date: &DateSnapshot) -> Option<DateSnapshot> {
        match self {
            Self::AdvanceMonth => Some(date.advance_month()),
            Self::RetreatMonth => Some(date.retreat_month()),
            Self::Resync => None,
        }
    }
}

/// The appliance's render cycle: calendar, event overlay, clock.
///
/// Owns the frame buffer between cycles. Each call to
/// [`CalendarClock::render_cycle`] runs to completion and returns the
/// finished frame for the display collaborator; the next cycle must not
/// start until the display has consumed it.
pub struct CalendarClock {
    renderer: Renderer,
    frame: PanelFrame,
}

impl CalendarClock {
    /// Create an appliance core painting with the given colors.
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self {
            renderer: Renderer::new(palette),
            frame: PanelFrame::new(),
        }
    }

    /// Run one full render cycle.
    ///
    /// Clears the frame, lays out the month grid (producing a fresh
    /// day-to-pixel table), overlays the parsed event markers, then paints
    /// the clock. An empty or garbled `events_text` renders as an empty
    /// event table; it never aborts the cycle.
    pub fn render_cycle(&mut self, date: &DateSnapshot, events_text: &str) -> &PanelFrame {
        self.frame.clear();
        let day_map = self.renderer.render_calendar(&mut self.frame, date);
        self.renderer
            .render_events(&mut self.frame, parse(events_text), &day_map);
        self.renderer.render_clock(&mut self.frame, date.hour, date.minute);
        &self.frame
    }

    /// The most recently rendered frame.
    #[must_use]
    pub const fn frame(&self) -> &PanelFrame {
        &self.frame
    }
}

impl Default for CalendarClock {
    fn default() -> Self {
        Self::new(Palette::DEFAULT)
    }
}
