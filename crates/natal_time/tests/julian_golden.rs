//! Julian Day golden values (Meeus, "Astronomical Algorithms", Chapter 7).

use natal_time::{CivilDate, CivilDateTime, calendar_to_jd, jd_to_calendar, jd_to_centuries};

const CASES: [(i32, u32, f64, f64); 7] = [
    (2000, 1, 1.5, 2_451_545.0),
    (1999, 1, 1.0, 2_451_179.5),
    (1987, 1, 27.0, 2_446_822.5),
    (1987, 6, 19.5, 2_446_966.0),
    (1988, 1, 27.0, 2_447_187.5),
    (1900, 1, 1.0, 2_415_020.5),
    (1600, 12, 31.0, 2_305_812.5),
];

#[test]
fn meeus_table_7a() {
    for (y, m, d, jd) in CASES {
        let got = calendar_to_jd(y, m, d);
        assert!((got - jd).abs() < 1e-9, "{y}-{m}-{d}: {got} != {jd}");
    }
}

#[test]
fn sputnik_launch() {
    // Example 7.a: 1957 October 4.81
    let jd = calendar_to_jd(1957, 10, 4.81);
    assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
}

#[test]
fn inverse_recovers_calendar() {
    for (y, m, d, jd) in CASES {
        let (yy, mm, dd) = jd_to_calendar(jd);
        assert_eq!((yy, mm), (y, m));
        assert!((dd - d).abs() < 1e-9, "{y}-{m}: day {dd} != {d}");
    }
}

#[test]
fn civil_instant_to_century() {
    let dt = CivilDateTime::with_clock(CivilDate::new(2024, 3, 20), "03:06").unwrap();
    let t = dt.julian_century();
    assert!((t - 0.242_152_749_258_5).abs() < 1e-12, "t = {t}");
    assert_eq!(t, jd_to_centuries(dt.julian_day()));
}

#[test]
fn invalid_dates_are_nan() {
    for (y, m, d) in [(2023, 2, 29), (2024, 2, 30), (2023, 0, 10), (2023, 13, 1), (2023, 6, 31)] {
        assert!(CivilDateTime::new(y, m, d, 12.0).julian_day().is_nan(), "{y}-{m}-{d}");
    }
    assert!(!CivilDateTime::new(2024, 2, 29, 12.0).julian_day().is_nan());
}
