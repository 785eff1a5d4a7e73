use chrono::NaiveDate;
use fasli_calendar::{Anchor, EPOCH_OFFSET, nowruz, resolve_anchor};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn nowruz_is_march_21() {
    for y in [-500, 0, 1, 1979, 2025, 3000] {
        assert_eq!(nowruz(y).unwrap(), ymd(y, 3, 21));
    }
}

#[test]
fn anchor_never_after_date() {
    let mut day = ymd(2023, 1, 1);
    for _ in 0..(3 * 366) {
        let anchor = resolve_anchor(day).unwrap();
        assert!(anchor.nowruz() <= day);
        let offset = anchor.day_offset(day).unwrap();
        assert!(offset < anchor.year_length());
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn year_number_offset() {
    let anchor = resolve_anchor(ymd(2025, 6, 15)).unwrap();
    assert_eq!(anchor.year(), 2025 - EPOCH_OFFSET);
    let anchor = resolve_anchor(ymd(2025, 2, 15)).unwrap();
    assert_eq!(anchor.year(), 2025 - EPOCH_OFFSET - 1);
}

#[test]
fn consecutive_anchors_tile_the_timeline() {
    for y in 1990..2040 {
        let a = Anchor::from_gregorian_year(y).unwrap();
        let b = Anchor::from_gregorian_year(y + 1).unwrap();
        assert_eq!(
            a.nowruz() + chrono::Days::new(u64::from(a.year_length())),
            b.nowruz()
        );
        assert_eq!(b.year(), a.year() + 1);
    }
}
