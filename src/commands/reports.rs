// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{
    CategoryTotal, MonthTotals, MonthlyPoint, category_breakdown, month_totals, monthly_series,
};
use crate::budget::load_budget;
use crate::config::{SERIES_WINDOW, TOP_CATEGORIES};
use crate::models::YearMonth;
use crate::navigator::MonthNavigator;
use crate::store::TransactionStore;
use crate::utils::{fmt_money, maybe_print_json, month_heading, pretty_table, require_user, resolve_month};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("series", sub)) => series(conn, sub)?,
        Some(("categories", sub)) => categories(conn, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub month: YearMonth,
    pub budget: Decimal,
    #[serde(flatten)]
    pub totals: MonthTotals,
}

pub fn summary_data(conn: &Connection, sub: &clap::ArgMatches) -> Result<Summary> {
    let user = require_user(conn)?;
    let month = resolve_month(conn, &user, sub)?;
    let store = TransactionStore::load(conn, &user);
    let budget = load_budget(conn, &user);
    Ok(Summary {
        month,
        budget,
        totals: month_totals(store.transactions(), month, budget),
    })
}

pub fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = summary_data(conn, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    let t = &data.totals;
    let remaining = if t.remaining < Decimal::ZERO {
        format!("-{}", fmt_money(&t.remaining.abs()))
    } else {
        fmt_money(&t.remaining)
    };
    println!("{}", month_heading(&MonthNavigator::at(data.month)));
    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Remaining", "Budget", "Budget used"],
            vec![vec![
                fmt_money(&t.income),
                fmt_money(&t.expense),
                remaining,
                fmt_money(&data.budget),
                format!("{}%", t.budget_used_pct.round_dp(1)),
            ]],
        )
    );
    Ok(())
}

pub fn series_data(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<MonthlyPoint>> {
    let user = require_user(conn)?;
    let month = resolve_month(conn, &user, sub)?;
    let window = sub.get_one::<usize>("months").copied().unwrap_or(SERIES_WINDOW);
    let store = TransactionStore::load(conn, &user);
    Ok(monthly_series(store.transactions(), month, window))
}

fn series(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = series_data(conn, sub)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|p| {
                vec![
                    format!("{} {}", p.month_label, p.month.year()),
                    fmt_money(&p.income),
                    fmt_money(&p.expense),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expenses"], rows));
    }
    Ok(())
}

pub fn categories_data(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<CategoryTotal>> {
    let user = require_user(conn)?;
    let month = resolve_month(conn, &user, sub)?;
    let top = sub.get_one::<usize>("top").copied().unwrap_or(TOP_CATEGORIES);
    let store = TransactionStore::load(conn, &user);
    Ok(category_breakdown(store.transactions(), month, top))
}

fn categories(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = categories_data(conn, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        return Ok(());
    }
    if data.is_empty() {
        println!("No expenses this month");
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|c| vec![c.category.clone(), fmt_money(&c.total)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], rows));
    Ok(())
}
