use taqweem::CalendarError;

#[test]
fn test_out_of_range_display() {
    let err = CalendarError::ConversionOutOfRange {
        year: 1800,
        month: 1,
        day: 5,
    };
    let msg = format!("{}", err);
    assert!(msg.contains("1800-01-05"));
}

#[test]
fn test_zone_unavailable_display() {
    let err = CalendarError::ZoneDatabaseUnavailable {
        zone: "Asia/Riyadh",
    };
    let msg = format!("{}", err);
    assert!(msg.contains("'Asia/Riyadh'"));
}
