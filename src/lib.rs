//! Rendering core for a 32×8 LED-matrix calendar appliance.
//!
//! The appliance shows three things on one NeoPixel-style (WS2812) panel:
//! the current month as a grid of day dots, a set of event markers fetched
//! from a remote calendar, and an HH:MM clock drawn with a 4×6 dot-matrix
//! digit font. This crate is the pure rendering core: it converts logical
//! `(x, y)` cells and calendar dates into physical LED indices and paints
//! them into a strip-ordered [`frame::Frame`]. Network transport, time
//! synchronization, Bluetooth command intake, and the LED driver itself are
//! external collaborators that only exchange data with this crate: a
//! [`calendar::DateSnapshot`], a response body for [`events::parse`], a
//! [`cycle::Command`] byte, and a finished frame.
//!
//! # Glossary
//!
//! - **Serpentine wiring:** adjacent panel columns are addressed in
//!   alternating vertical direction, with the strip starting at the far end
//!   of the panel. See [`layout::SerpentinePanel`].
//! - **Day-to-pixel table:** per-render-cycle mapping from day-of-month to
//!   the LED index where that day was painted. See [`calendar::DayMap`].
//! - **Month indicator:** one fixed cell per month, lit to show which month
//!   is displayed. See [`calendar::month_indicator_cell`].
//! - **Holiday sentinel:** the `X` token prefix in the event response body
//!   marking the start of the holiday subsequence. See [`events`].

#![cfg_attr(not(feature = "host"), no_std)]

pub mod calendar;
pub mod cycle;
mod error;
pub mod events;
pub mod frame;
pub mod glyphs;
pub mod layout;
pub mod render;
#[cfg(feature = "host")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};

/// Number of columns on the appliance panel.
pub const PANEL_WIDTH: usize = 32;
/// Number of rows on the appliance panel.
pub const PANEL_HEIGHT: usize = 8;
/// Total LED count on the appliance panel.
pub const PANEL_LEDS: usize = PANEL_WIDTH * PANEL_HEIGHT;

/// The appliance panel wiring: 32×8, serpentine from the far column.
pub type Panel = layout::SerpentinePanel<PANEL_LEDS, PANEL_WIDTH, PANEL_HEIGHT>;
/// A frame buffer sized for the appliance panel.
pub type PanelFrame = frame::Frame<PANEL_LEDS>;
/// A renderer sized for the appliance panel.
pub type Renderer = render::PanelRenderer<PANEL_LEDS, PANEL_WIDTH, PANEL_HEIGHT>;
