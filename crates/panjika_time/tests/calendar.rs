use panjika_time::{CivilDate, Instant, SECONDS_PER_DAY};

#[test]
fn a_week_of_dates_cycles_weekdays() {
    let start = CivilDate::new(2024, 4, 14).unwrap();
    let weekdays: Vec<u8> = (0..7).map(|i| start.add_days(i).weekday()).collect();
    assert_eq!(weekdays, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn leap_year_span() {
    let a = CivilDate::new(2024, 1, 1).unwrap();
    let b = CivilDate::new(2025, 1, 1).unwrap();
    assert_eq!(b.days_since(a), 366);
}

#[test]
fn midnight_instants_are_a_day_apart() {
    let d = CivilDate::new(2024, 4, 14).unwrap();
    let a = d.midnight_in_offset(330);
    let b = d.succ().midnight_in_offset(330);
    assert!((b.seconds_since(a) - SECONDS_PER_DAY).abs() < 1e-6);
}

#[test]
fn instant_to_date_across_offsets() {
    let t = Instant::from_utc(2024, 12, 31, 20, 0, 0.0);
    assert_eq!(CivilDate::utc_date_of(t).to_string(), "2024-12-31");
    assert_eq!(CivilDate::in_offset(t, 330).to_string(), "2025-01-01");
    assert_eq!(CivilDate::in_offset(t, -300).to_string(), "2024-12-31");
}
