use super::*;

#[test]
fn format_start_time_trims_seconds() {
    assert_eq!(format_start_time("2026-03-01T09:30:00"), "2026-03-01 09:30");
    assert_eq!(format_start_time("2026-03-01T09:30:00.000Z"), "2026-03-01 09:30");
}

#[test]
fn format_start_time_passes_through_other_formats() {
    assert_eq!(format_start_time("tomorrow"), "tomorrow");
    assert_eq!(format_start_time(""), "");
}
