// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Figures derived from a ledger. Every function here is pure: it reads the
//! transaction slice and returns freshly computed values. Sums saturate at
//! the `Decimal` bounds instead of overflowing.

use crate::models::{Transaction, TransactionType, YearMonth};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub remaining: Decimal,
    pub budget_used_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    pub month: YearMonth,
    pub month_label: String,
    pub income: Decimal,
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

fn in_month(transactions: &[Transaction], month: YearMonth) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(move |t| month.contains(t.date))
}

fn income_and_expense(transactions: &[Transaction], month: YearMonth) -> (Decimal, Decimal) {
    in_month(transactions, month).fold((Decimal::ZERO, Decimal::ZERO), |(inc, exp), t| {
        match t.kind {
            TransactionType::Income => (inc.saturating_add(t.amount), exp),
            TransactionType::Expense => (inc, exp.saturating_add(t.amount)),
        }
    })
}

pub fn month_totals(transactions: &[Transaction], month: YearMonth, budget: Decimal) -> MonthTotals {
    let (income, expense) = income_and_expense(transactions, month);
    let budget_used_pct = if budget > Decimal::ZERO {
        expense
            .checked_div(budget)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };
    MonthTotals {
        income,
        expense,
        remaining: income.saturating_sub(expense),
        budget_used_pct,
    }
}

/// `window` consecutive months ending at `reference`, oldest first.
pub fn monthly_series(
    transactions: &[Transaction],
    reference: YearMonth,
    window: usize,
) -> Vec<MonthlyPoint> {
    (0..window)
        .rev()
        .map(|back| {
            let back = i32::try_from(back).unwrap_or(i32::MAX);
            let month = reference.offset(-back);
            let (income, expense) = income_and_expense(transactions, month);
            MonthlyPoint {
                month,
                month_label: month.short_label().to_string(),
                income,
                expense,
            }
        })
        .collect()
}

/// Expense totals per category for `month`, largest first, at most `top_n`.
/// Equal totals keep the order in which the categories first appear.
pub fn category_breakdown(
    transactions: &[Transaction],
    month: YearMonth,
    top_n: usize,
) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for t in in_month(transactions, month).filter(|t| t.kind == TransactionType::Expense) {
        match index.get(t.category.as_str()) {
            Some(&i) => groups[i].total = groups[i].total.saturating_add(t.amount),
            None => {
                index.insert(t.category.as_str(), groups.len());
                groups.push(CategoryTotal {
                    category: t.category.clone(),
                    total: t.amount,
                });
            }
        }
    }
    // sort_by is stable, so ties stay in first-seen order
    groups.sort_by(|a, b| b.total.cmp(&a.total));
    groups.truncate(top_n);
    groups
}

/// The month's transactions, newest date first.
pub fn month_transactions(transactions: &[Transaction], month: YearMonth) -> Vec<&Transaction> {
    let mut out: Vec<&Transaction> = in_month(transactions, month).collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}
