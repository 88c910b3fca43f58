// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::budget::{load_budget, save_budget};
use fintrack::config::{APP, Config, default_budget};
use fintrack::models::YearMonth;
use fintrack::navigator::{Direction, MonthNavigator};
use fintrack::session;
use fintrack::storage::{CURRENT_USER_KEY, KeyValueStore, MemoryStore, budget_key};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[test]
fn any_non_empty_credentials_log_in() {
    let kv = MemoryStore::new();
    assert_eq!(session::current_user(&kv).unwrap(), None);
    let user = session::login(&kv, "  maria ", "x").unwrap();
    assert_eq!(user, "maria");
    assert_eq!(kv.get(CURRENT_USER_KEY).unwrap().as_deref(), Some("maria"));
    assert_eq!(session::current_user(&kv).unwrap().as_deref(), Some("maria"));
}

#[test]
fn blank_credentials_are_rejected() {
    let kv = MemoryStore::new();
    assert!(session::login(&kv, "", "pw").unwrap_err().is_validation());
    assert!(session::login(&kv, "maria", "").unwrap_err().is_validation());
    assert_eq!(session::current_user(&kv).unwrap(), None);
}

#[test]
fn logout_clears_user_and_view() {
    let kv = MemoryStore::new();
    session::login(&kv, "maria", "pw").unwrap();
    let mut nav = MonthNavigator::at(YearMonth::new(2020, 1).unwrap());
    nav.step(Direction::Next);
    session::save_navigator(&kv, "maria", &nav).unwrap();
    assert_eq!(
        session::navigator(&kv, "maria").current(),
        YearMonth::new(2020, 2).unwrap()
    );

    assert_eq!(session::logout(&kv).unwrap().as_deref(), Some("maria"));
    assert_eq!(session::current_user(&kv).unwrap(), None);
    assert_eq!(session::navigator(&kv, "maria").current(), YearMonth::today());
    assert_eq!(session::logout(&kv).unwrap(), None);
}

#[test]
fn login_resets_viewed_month() {
    let kv = MemoryStore::new();
    let nav = MonthNavigator::at(YearMonth::new(2019, 7).unwrap());
    session::save_navigator(&kv, "maria", &nav).unwrap();
    session::login(&kv, "maria", "pw").unwrap();
    assert!(session::navigator(&kv, "maria").is_current_month());
}

#[test]
fn budget_defaults_and_persists() {
    let kv = MemoryStore::new();
    assert_eq!(load_budget(&kv, "maria"), Decimal::from(5000));
    assert_eq!(default_budget(), Decimal::from(5000));

    save_budget(&kv, "maria", "1234.50".parse().unwrap()).unwrap();
    assert_eq!(kv.get(&budget_key("maria")).unwrap().as_deref(), Some("1234.5"));
    assert_eq!(load_budget(&kv, "maria"), "1234.5".parse::<Decimal>().unwrap());
    assert_eq!(load_budget(&kv, "other"), Decimal::from(5000));

    save_budget(&kv, "maria", Decimal::ZERO).unwrap();
    assert_eq!(load_budget(&kv, "maria"), Decimal::ZERO);

    assert!(save_budget(&kv, "maria", Decimal::from(-1)).unwrap_err().is_validation());
}

#[test]
fn garbage_budget_falls_back_to_default() {
    let kv = MemoryStore::new();
    kv.set(&budget_key("maria"), "NaN").unwrap();
    assert_eq!(load_budget(&kv, "maria"), Decimal::from(5000));
}

#[test]
fn config_reads_overrides() {
    let cfg = Config::from_lookup(|k| match k {
        "FINTRACK_DB" => Some("/tmp/ft/db.sqlite".to_string()),
        "FINTRACK_LOG" => Some("debug".to_string()),
        _ => None,
    });
    assert_eq!(cfg.db_path, Some(PathBuf::from("/tmp/ft/db.sqlite")));
    assert_eq!(cfg.log_filter, "debug");

    let blank = Config::from_lookup(|_| Some("  ".to_string()));
    assert_eq!(blank, Config::default());
    assert_eq!(blank.db_path, None);
    assert_eq!(blank.log_filter, "warn");
    assert_eq!(APP, ("com.fintrack", "Fintrack", "fintrack"));
}
