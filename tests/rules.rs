#![forbid(unsafe_code)]
use chrono::{Duration, NaiveDate};
use roulement::{classify, classify_on, day_index, RosterKind, RuleError, ShiftCategory};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn anchor_date_is_day_two() {
    assert_eq!(day_index(d(2025, 7, 1)), 2);
}

#[test]
fn day_index_in_range_and_periodic() {
    let start = d(2024, 12, 28);
    for offset in 0..60 {
        let date = start + Duration::days(offset);
        let idx = day_index(date);
        assert!((1..=4).contains(&idx), "index {idx} hors cycle pour {date}");
        assert_eq!(idx, day_index(date + Duration::days(4)));
    }
}

#[test]
fn day_index_defined_before_anchor() {
    assert_eq!(day_index(d(2025, 6, 30)), 1);
    assert_eq!(day_index(d(2025, 6, 29)), 4);
    assert_eq!(day_index(d(2025, 6, 28)), 3);
}

#[test]
fn gold_one_always_early() {
    for day in 1..=4 {
        assert_eq!(
            classify(RosterKind::Gold, 1, day).unwrap(),
            ShiftCategory::Early
        );
    }
}

#[test]
fn gold_six_and_up_always_middle() {
    for day in 1..=4 {
        for n in [6, 7, 12, 40] {
            assert_eq!(
                classify(RosterKind::Gold, n, day).unwrap(),
                ShiftCategory::Middle
            );
        }
    }
}

#[test]
fn gold_three_five_early_on_odd_days() {
    for n in [3, 5] {
        assert_eq!(classify(RosterKind::Gold, n, 1).unwrap(), ShiftCategory::Early);
        assert_eq!(classify(RosterKind::Gold, n, 3).unwrap(), ShiftCategory::Early);
        assert_eq!(classify(RosterKind::Gold, n, 2).unwrap(), ShiftCategory::Middle);
        assert_eq!(classify(RosterKind::Gold, n, 4).unwrap(), ShiftCategory::Middle);
    }
}

#[test]
fn gold_two_four_flip_against_three_five() {
    for n in [2, 4] {
        assert_eq!(classify(RosterKind::Gold, n, 1).unwrap(), ShiftCategory::Middle);
        assert_eq!(classify(RosterKind::Gold, n, 3).unwrap(), ShiftCategory::Middle);
        assert_eq!(classify(RosterKind::Gold, n, 2).unwrap(), ShiftCategory::Early);
        assert_eq!(classify(RosterKind::Gold, n, 4).unwrap(), ShiftCategory::Early);
    }
    // jamais la même catégorie des deux côtés du cycle
    for n in [2, 3, 4, 5] {
        assert_ne!(
            classify(RosterKind::Gold, n, 1).unwrap(),
            classify(RosterKind::Gold, n, 2).unwrap()
        );
    }
}

#[test]
fn gold_zero_is_out_of_domain() {
    let err = classify(RosterKind::Gold, 0, 1).unwrap_err();
    assert_eq!(
        err,
        RuleError::InvalidNumber {
            roster: RosterKind::Gold,
            number: 0
        }
    );
    assert_eq!(err.to_string(), "Invalid/Unhandled Gold number 0");
}

#[test]
fn silver_ignores_the_cycle() {
    for day in 1..=4 {
        assert_eq!(
            classify(RosterKind::Silver, 1, day).unwrap(),
            ShiftCategory::Early
        );
        assert_eq!(
            classify(RosterKind::Silver, 2, day).unwrap(),
            ShiftCategory::Middle
        );
        assert_eq!(
            classify(RosterKind::Silver, 9, day).unwrap(),
            ShiftCategory::Middle
        );
    }
    assert_eq!(
        classify(RosterKind::Silver, 0, 1).unwrap_err().to_string(),
        "Invalid/Unhandled Silver number 0"
    );
}

#[test]
fn classify_on_follows_the_date() {
    // Gold AM 5 : Early un jour 1, Middle un jour 2
    assert_eq!(
        classify_on(RosterKind::Gold, 5, d(2025, 6, 30)).unwrap(),
        ShiftCategory::Early
    );
    assert_eq!(
        classify_on(RosterKind::Gold, 5, d(2025, 7, 1)).unwrap(),
        ShiftCategory::Middle
    );
}

#[test]
fn start_times_are_fixed() {
    assert_eq!(ShiftCategory::Early.start_time(), "06:45");
    assert_eq!(ShiftCategory::Middle.start_time(), "08:00");
}
