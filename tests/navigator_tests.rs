// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Local, NaiveDate};
use fintrack::models::YearMonth;
use fintrack::navigator::{Direction, MonthNavigator};

fn ym(y: i32, m: u32) -> YearMonth {
    YearMonth::new(y, m).unwrap()
}

#[test]
fn january_prev_rolls_to_december() {
    let mut nav = MonthNavigator::at(ym(2025, 1));
    assert_eq!(nav.step(Direction::Prev), ym(2024, 12));
    assert_eq!(nav.current(), ym(2024, 12));
}

#[test]
fn december_next_rolls_to_january() {
    let mut nav = MonthNavigator::at(ym(2024, 12));
    assert_eq!(nav.step(Direction::Next), ym(2025, 1));
}

#[test]
fn stepping_is_unbounded_and_reversible() {
    let mut nav = MonthNavigator::at(ym(2025, 6));
    for _ in 0..30 {
        nav.step(Direction::Prev);
    }
    assert_eq!(nav.current(), ym(2022, 12));
    for _ in 0..30 {
        nav.step(Direction::Next);
    }
    assert_eq!(nav.current(), ym(2025, 6));
}

#[test]
fn current_month_check_uses_given_day() {
    let nav = MonthNavigator::at(ym(2025, 3));
    assert!(nav.is_current_month_on(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
    assert!(!nav.is_current_month_on(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
    assert!(!nav.is_current_month_on(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));
}

#[test]
fn new_navigator_starts_on_today() {
    let today = Local::now().date_naive();
    let nav = MonthNavigator::new();
    assert_eq!(nav.current().year(), today.year());
    assert_eq!(nav.current().month(), today.month());
    assert!(nav.is_current_month());
    let mut moved = nav;
    moved.step(Direction::Next);
    assert!(!moved.is_current_month());
}

#[test]
fn direction_parses_from_text() {
    assert_eq!("prev".parse::<Direction>().unwrap(), Direction::Prev);
    assert_eq!("NEXT".parse::<Direction>().unwrap(), Direction::Next);
    assert!("sideways".parse::<Direction>().is_err());
}

#[test]
fn year_month_parsing_and_labels() {
    let m: YearMonth = "2024-11".parse().unwrap();
    assert_eq!(m, ym(2024, 11));
    assert_eq!(m.to_string(), "2024-11");
    assert_eq!(m.short_label(), "Nov");
    assert_eq!(m.long_label(), "November 2024");
    assert_eq!(m.offset(3), ym(2025, 2));
    assert_eq!(m.offset(-11), ym(2023, 12));
    assert!("2024-13".parse::<YearMonth>().is_err());
    assert!("2024".parse::<YearMonth>().is_err());
    assert!(YearMonth::new(2024, 0).is_none());
}
