// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use fintrack::aggregate::{
    CategoryTotal, category_breakdown, month_totals, month_transactions, monthly_series,
};
use fintrack::models::{Transaction, TransactionType, YearMonth};
use rust_decimal::Decimal;

fn tx(id: &str, kind: TransactionType, amount: i64, cat: &str, date: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        kind,
        amount: Decimal::from(amount),
        description: format!("tx {}", id),
        category: cat.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        is_installment: false,
        installment_info: None,
    }
}

fn ym(y: i32, m: u32) -> YearMonth {
    YearMonth::new(y, m).unwrap()
}

use TransactionType::{Expense, Income};

fn sample() -> Vec<Transaction> {
    vec![
        tx("1", Income, 1000, "Salary", "2025-03-01"),
        tx("2", Income, 500, "Bonus", "2025-03-31"),
        tx("3", Expense, 300, "Food", "2025-03-15"),
        tx("4", Expense, 200, "Transportation", "2025-03-20"),
        // neighbours that must not leak into March
        tx("5", Expense, 999, "Food", "2025-02-28"),
        tx("6", Income, 999, "Salary", "2025-04-01"),
        tx("7", Expense, 999, "Food", "2024-03-15"),
    ]
}

#[test]
fn month_totals_sum_only_the_month() {
    let t = month_totals(&sample(), ym(2025, 3), Decimal::from(5000));
    assert_eq!(t.income, Decimal::from(1500));
    assert_eq!(t.expense, Decimal::from(500));
    assert_eq!(t.remaining, Decimal::from(1000));
    assert_eq!(t.budget_used_pct, Decimal::from(10));
}

#[test]
fn remaining_can_go_negative() {
    let txs = vec![
        tx("1", Income, 100, "Salary", "2025-01-05"),
        tx("2", Expense, 250, "Housing", "2025-01-06"),
    ];
    let t = month_totals(&txs, ym(2025, 1), Decimal::from(200));
    assert_eq!(t.remaining, Decimal::from(-150));
    assert_eq!(t.budget_used_pct, Decimal::from(125));
}

#[test]
fn zero_budget_reports_zero_usage() {
    let t = month_totals(&sample(), ym(2025, 3), Decimal::ZERO);
    assert_eq!(t.budget_used_pct, Decimal::ZERO);
    assert_eq!(t.expense, Decimal::from(500));
}

#[test]
fn empty_month_is_all_zero() {
    let t = month_totals(&sample(), ym(2030, 7), Decimal::from(5000));
    assert_eq!(t.income, Decimal::ZERO);
    assert_eq!(t.expense, Decimal::ZERO);
    assert_eq!(t.remaining, Decimal::ZERO);
    assert_eq!(t.budget_used_pct, Decimal::ZERO);
}

#[test]
fn decimal_sums_are_exact() {
    let mut a = tx("1", Expense, 0, "Food", "2025-03-02");
    a.amount = "0.1".parse().unwrap();
    let mut b = tx("2", Expense, 0, "Food", "2025-03-03");
    b.amount = "0.2".parse().unwrap();
    let t = month_totals(&[a, b], ym(2025, 3), Decimal::from(5000));
    assert_eq!(t.expense, "0.3".parse::<Decimal>().unwrap());
}

#[test]
fn series_has_fixed_window_oldest_first() {
    let series = monthly_series(&sample(), ym(2025, 3), 6);
    assert_eq!(series.len(), 6);
    let months: Vec<_> = series.iter().map(|p| p.month).collect();
    assert_eq!(
        months,
        vec![ym(2024, 10), ym(2024, 11), ym(2024, 12), ym(2025, 1), ym(2025, 2), ym(2025, 3)]
    );
    assert_eq!(series[0].month_label, "Oct");
    assert_eq!(series[5].month_label, "Mar");
    assert_eq!(series[4].expense, Decimal::from(999));
    assert_eq!(series[5].income, Decimal::from(1500));
    assert_eq!(series[5].expense, Decimal::from(500));
    for p in &series[..4] {
        assert_eq!(p.income, Decimal::ZERO);
        assert_eq!(p.expense, Decimal::ZERO);
    }
}

#[test]
fn series_on_empty_ledger_still_fills_window() {
    let series = monthly_series(&[], ym(2025, 1), 6);
    assert_eq!(series.len(), 6);
    assert!(series.iter().all(|p| p.income.is_zero() && p.expense.is_zero()));
    assert!(monthly_series(&[], ym(2025, 1), 0).is_empty());
}

#[test]
fn category_breakdown_groups_and_orders() {
    let txs = vec![
        tx("1", Expense, 100, "Food", "2025-05-01"),
        tx("2", Expense, 75, "Transport", "2025-05-02"),
        tx("3", Expense, 50, "Food", "2025-05-03"),
        tx("4", Income, 9000, "Salary", "2025-05-04"),
    ];
    let out = category_breakdown(&txs, ym(2025, 5), 8);
    assert_eq!(
        out,
        vec![
            CategoryTotal { category: "Food".into(), total: Decimal::from(150) },
            CategoryTotal { category: "Transport".into(), total: Decimal::from(75) },
        ]
    );
}

#[test]
fn category_ties_keep_first_seen_order_and_truncate() {
    let txs = vec![
        tx("1", Expense, 10, "B", "2025-05-01"),
        tx("2", Expense, 10, "A", "2025-05-02"),
        tx("3", Expense, 30, "C", "2025-05-03"),
        tx("4", Expense, 10, "D", "2025-05-04"),
    ];
    let names: Vec<_> = category_breakdown(&txs, ym(2025, 5), 3)
        .into_iter()
        .map(|c| c.category)
        .collect();
    assert_eq!(names, vec!["C", "B", "A"]);
}

#[test]
fn category_breakdown_is_case_sensitive_and_may_be_empty() {
    let txs = vec![
        tx("1", Expense, 10, "food", "2025-05-01"),
        tx("2", Expense, 20, "Food", "2025-05-02"),
    ];
    assert_eq!(category_breakdown(&txs, ym(2025, 5), 8).len(), 2);
    assert!(category_breakdown(&txs, ym(2025, 6), 8).is_empty());
}

#[test]
fn month_listing_is_newest_first() {
    let txs = sample();
    let ids: Vec<_> = month_transactions(&txs, ym(2025, 3))
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["2", "4", "3", "1"]);
}

#[test]
fn aggregation_is_repeatable() {
    let txs = sample();
    let a = month_totals(&txs, ym(2025, 3), Decimal::from(5000));
    let b = month_totals(&txs, ym(2025, 3), Decimal::from(5000));
    assert_eq!(a, b);
    assert_eq!(txs, sample());
}

#[test]
fn huge_amounts_saturate_instead_of_overflowing() {
    let huge = |id: &str, kind: TransactionType, cat: &str| Transaction {
        amount: "50000000000000000000000000000".parse().unwrap(),
        ..tx(id, kind, 0, cat, "2025-03-10")
    };
    let ledger = vec![
        huge("1", Expense, "Housing"),
        huge("2", Expense, "Housing"),
        huge("3", Income, "Salary"),
        huge("4", Income, "Salary"),
    ];
    let march = ym(2025, 3);

    let totals = month_totals(&ledger, march, Decimal::ONE);
    assert_eq!(totals.income, Decimal::MAX);
    assert_eq!(totals.expense, Decimal::MAX);
    assert_eq!(totals.remaining, Decimal::ZERO);
    assert_eq!(totals.budget_used_pct, Decimal::MAX);

    let series = monthly_series(&ledger, march, 1);
    assert_eq!(series[0].expense, Decimal::MAX);

    let cats = category_breakdown(&ledger, march, 8);
    assert_eq!(cats[0].total, Decimal::MAX);
}

#[test]
fn budget_percentage_saturates_on_tiny_budget() {
    let ledger = vec![tx("1", Expense, 1_000_000_000_000, "Housing", "2025-03-10")];
    let totals = month_totals(&ledger, ym(2025, 3), Decimal::ONE);
    assert_eq!(totals.budget_used_pct, Decimal::from(100_000_000_000_000i64));

    let tiny = Decimal::new(1, 28);
    let totals = month_totals(&ledger, ym(2025, 3), tiny);
    assert_eq!(totals.budget_used_pct, Decimal::MAX);
    assert_eq!(totals.remaining, Decimal::from(-1_000_000_000_000i64));
}
