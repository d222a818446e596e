#![allow(missing_docs)]
//! Host-level smoke test for the PNG frame preview.

use calendar_panel::calendar::DateSnapshot;
use calendar_panel::cycle::CalendarClock;
use calendar_panel::to_png::write_frame_png;
use calendar_panel::{PANEL_HEIGHT, PANEL_LEDS, PANEL_WIDTH};
use time::macros::datetime;

#[test]
fn rendered_frame_writes_a_png() {
    let mut clock = CalendarClock::default();
    let date = DateSnapshot::from_local(&datetime!(2024-02-29 13:45 UTC));
    let frame = clock.render_cycle(&date, "5-X12-");

    let output_dir = tempfile::tempdir().unwrap();
    let output_path = output_dir.path().join("calendar_frame.png");
    write_frame_png::<PANEL_LEDS, PANEL_WIDTH, PANEL_HEIGHT>(frame, &output_path, 1024).unwrap();

    let metadata = std::fs::metadata(&output_path).unwrap();
    assert!(metadata.len() > 8, "PNG file should not be empty");
}
