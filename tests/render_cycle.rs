#![allow(missing_docs)]
//! Host-level tests for the renderer, the date snapshot, and the full cycle.

use calendar_panel::calendar::DateSnapshot;
use calendar_panel::cycle::{CalendarClock, Command};
use calendar_panel::render::Palette;
use calendar_panel::{Error, Panel, PanelFrame, Renderer};
use smart_leds::{RGB8, colors};
use time::macros::datetime;

const BLACK: RGB8 = RGB8::new(0, 0, 0);

/// Thursday, February 29th 2024, 13:45.
fn leap_day_snapshot() -> DateSnapshot {
    DateSnapshot::from_local(&datetime!(2024-02-29 13:45 UTC))
}

#[test]
fn snapshot_captures_local_fields() {
    let date = leap_day_snapshot();
    assert_eq!(date.year, 2024);
    assert_eq!(date.month, 2);
    assert_eq!(date.day, 29);
    assert_eq!(date.weekday, 4);
    assert_eq!(date.hour, 13);
    assert_eq!(date.minute, 45);
}

#[test]
fn calendar_pass_builds_the_day_table() {
    let renderer = Renderer::new(Palette::DEFAULT);
    let mut frame = PanelFrame::new();
    let day_map = renderer.render_calendar(&mut frame, &leap_day_snapshot());

    assert_eq!(day_map.len(), 29);
    assert_eq!(day_map.pixel(1), Some(Panel::pixel_index(7, 6)));
    assert_eq!(day_map.pixel(0), None);
    assert_eq!(day_map.pixel(30), None);
}

#[test]
fn calendar_pass_paints_today_and_the_indicator() {
    let renderer = Renderer::new(Palette::DEFAULT);
    let mut frame = PanelFrame::new();
    let day_map = renderer.render_calendar(&mut frame, &leap_day_snapshot());

    let today_pixel = day_map.pixel(29).unwrap();
    assert_eq!(frame[today_pixel], Palette::DEFAULT.today);
    // February's indicator cell.
    assert_eq!(
        frame[Panel::pixel_index(11, 2)],
        Palette::DEFAULT.month_indicator
    );
}

#[test]
fn empty_event_list_leaves_the_frame_untouched() {
    let renderer = Renderer::new(Palette::DEFAULT);
    let mut frame = PanelFrame::new();
    let day_map = renderer.render_calendar(&mut frame, &leap_day_snapshot());

    let before = frame;
    renderer.render_events(&mut frame, calendar_panel::events::parse(""), &day_map);
    assert_eq!(frame, before);
}

#[test]
fn event_markers_recolor_their_day_cells() {
    let renderer = Renderer::new(Palette::DEFAULT);
    let mut frame = PanelFrame::new();
    let day_map = renderer.render_calendar(&mut frame, &leap_day_snapshot());

    renderer.render_events(&mut frame, calendar_panel::events::parse("5-X12-"), &day_map);
    assert_eq!(frame[day_map.pixel(5).unwrap()], Palette::DEFAULT.event);
    assert_eq!(frame[day_map.pixel(12).unwrap()], Palette::DEFAULT.holiday);
}

#[test]
fn events_outside_the_month_paint_nothing() {
    let renderer = Renderer::new(Palette::DEFAULT);
    let mut frame = PanelFrame::new();
    let day_map = renderer.render_calendar(&mut frame, &leap_day_snapshot());

    let before = frame;
    // Day 30 does not exist in February 2024, "abc" does not parse.
    renderer.render_events(&mut frame, calendar_panel::events::parse("30-abc-"), &day_map);
    assert_eq!(frame, before);
}

#[test]
fn clock_digits_land_at_their_offsets_in_their_colors() {
    let renderer = Renderer::new(Palette::DEFAULT);
    let mut frame = PanelFrame::new();
    renderer.render_clock(&mut frame, 13, 45);

    // One known lit dot per digit: `1`, `3`, `4`, `5` all light (1, 1)
    // within their glyph box, except `4` which lights (3, 1).
    assert_eq!(frame[Panel::pixel_index(17, 1)], Palette::DEFAULT.clock[0]);
    assert_eq!(frame[Panel::pixel_index(21, 1)], Palette::DEFAULT.clock[1]);
    assert_eq!(frame[Panel::pixel_index(27, 1)], Palette::DEFAULT.clock[2]);
    assert_eq!(frame[Panel::pixel_index(29, 1)], Palette::DEFAULT.clock[3]);
}

#[test]
fn digit_glyphs_light_the_expected_dot_counts() {
    let renderer = Renderer::new(Palette::DEFAULT);
    let expected_dots = [12, 9, 11, 9, 10, 11, 12, 9, 12, 12];
    for (digit, expected) in (0..10_u8).zip(expected_dots) {
        let mut frame = PanelFrame::new();
        renderer.paint_digit(&mut frame, 0, digit, colors::WHITE);
        let lit = frame.iter().filter(|&&pixel| pixel != BLACK).count();
        assert_eq!(lit, expected, "digit {digit}");
    }
}

#[test]
fn out_of_range_digit_paints_nothing() {
    let renderer = Renderer::new(Palette::DEFAULT);
    let mut frame = PanelFrame::new();
    renderer.paint_digit(&mut frame, 0, 10, colors::WHITE);
    assert_eq!(frame, PanelFrame::new());
}

#[test]
fn month_adjust_recomputes_the_weekday() {
    // Advancing clamps Jan 31 to leap-day February.
    let from_january = DateSnapshot::from_local(&datetime!(2024-01-31 10:30 UTC));
    let leap_day = DateSnapshot::from_local(&datetime!(2024-02-29 10:30 UTC));
    assert_eq!(from_january.advance_month(), leap_day);

    // Retreating clamps Mar 31 the same way.
    let from_march = DateSnapshot::from_local(&datetime!(2024-03-31 10:30 UTC));
    assert_eq!(from_march.retreat_month(), leap_day);

    // December to January carries the year forward.
    let december = DateSnapshot::from_local(&datetime!(2024-12-15 10:30 UTC));
    let january = DateSnapshot::from_local(&datetime!(2025-01-15 10:30 UTC));
    assert_eq!(december.advance_month(), january);

    // January to December carries it back.
    assert_eq!(january.retreat_month(), december);
}

#[test]
fn command_bytes_decode_or_reject() {
    assert_eq!(Command::try_from(b'+').unwrap(), Command::AdvanceMonth);
    assert_eq!(Command::try_from(b'-').unwrap(), Command::RetreatMonth);
    assert_eq!(Command::try_from(b'0').unwrap(), Command::Resync);
    assert!(matches!(
        Command::try_from(b'q'),
        Err(Error::UnknownCommand(b'q'))
    ));
}

#[test]
fn unknown_command_reports_the_byte() {
    let error = Command::try_from(b'q').unwrap_err();
    assert_eq!(error.to_string(), "unrecognized command byte 0x71");
}

#[test]
fn resync_defers_to_the_time_source() {
    let date = leap_day_snapshot();
    assert_eq!(
        Command::AdvanceMonth.adjusted(&date),
        Some(date.advance_month())
    );
    assert_eq!(
        Command::RetreatMonth.adjusted(&date),
        Some(date.retreat_month())
    );
    assert_eq!(Command::Resync.adjusted(&date), None);
}

#[test]
fn full_cycle_combines_all_three_passes() {
    let mut clock = CalendarClock::default();
    let date = leap_day_snapshot();
    let frame = *clock.render_cycle(&date, "5-X12-");

    // Calendar: today and a plain weekday.
    assert_eq!(frame[Panel::pixel_index(7, 6)], Palette::DEFAULT.weekday);
    // Event overlay.
    let day5 = frame
        .iter()
        .filter(|&&pixel| pixel == Palette::DEFAULT.event)
        .count();
    assert_eq!(day5, 1);
    let day12 = frame
        .iter()
        .filter(|&&pixel| pixel == Palette::DEFAULT.holiday)
        .count();
    assert_eq!(day12, 1);
    // Indicator and a clock dot.
    assert_eq!(
        frame[Panel::pixel_index(11, 2)],
        Palette::DEFAULT.month_indicator
    );
    assert_eq!(frame[Panel::pixel_index(17, 1)], Palette::DEFAULT.clock[0]);
    // The owned buffer holds the finished frame.
    assert_eq!(*clock.frame(), frame);
}

#[test]
fn cycles_are_deterministic() {
    let date = leap_day_snapshot();
    let mut first = CalendarClock::default();
    let mut second = CalendarClock::default();
    assert_eq!(
        first.render_cycle(&date, "X1-2-"),
        second.render_cycle(&date, "X1-2-")
    );
}
