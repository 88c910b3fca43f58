// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::month_transactions;
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::navigator::MonthNavigator;
use crate::session;
use crate::store::{SaveStatus, TransactionStore};
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table, require_user,
    resolve_month,
};
use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

/// Today when viewing the current month, otherwise the first of the
/// viewed month.
pub fn default_date(nav: &MonthNavigator) -> NaiveDate {
    let today = Local::now().date_naive();
    if nav.is_current_month_on(today) {
        today
    } else {
        nav.current().first_day().unwrap_or(today)
    }
}

pub fn candidate_from_args(conn: &Connection, user: &str, sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TransactionType>())
        .transpose()
        .map_err(|e| anyhow!(e))?
        .unwrap_or(TransactionType::Expense);
    let amount = parse_decimal(
        sub.get_one::<String>("amount")
            .context("--amount is required")?,
    )?;
    let description = sub
        .get_one::<String>("description")
        .context("--description is required")?;
    let category = sub
        .get_one::<String>("category")
        .context("--category is required")?;
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => default_date(&session::navigator(conn, user)),
    };
    let mut candidate = NewTransaction::new(kind, amount, description, category, date);
    if let Some(n) = sub.get_one::<u32>("installments") {
        candidate = candidate.with_installments(*n);
    }
    Ok(candidate)
}

/// Records the candidate described by `sub` and returns the new records.
pub fn record(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let user = require_user(conn)?;
    let candidate = candidate_from_args(conn, &user, sub)?;
    let mut store = TransactionStore::load(conn, &user);
    let added = store.add(&candidate)?;
    report_status(&added.status);
    Ok(added
        .ids
        .iter()
        .filter_map(|id| store.get(id).cloned())
        .collect())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let created = record(conn, sub)?;
    let Some(first) = created.first() else {
        return Ok(());
    };
    match first.installment() {
        Some(info) => {
            println!(
                "Recorded {} installments of '{}' from {} (each record: {}, per installment: {})",
                info.total,
                first.description,
                info.original_date,
                fmt_money(&first.amount),
                fmt_money(&info.per_installment_amount())
            );
            for t in &created {
                println!("  {}  {}", t.id, t.date);
            }
        }
        None => println!(
            "Recorded {} {} on {} for '{}' ({}) [{}]",
            first.kind,
            fmt_money(&first.amount),
            first.date,
            first.description,
            first.category,
            first.id
        ),
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = require_user(conn)?;
    let id = sub.get_one::<String>("id").context("id is required")?.trim();
    let mut store = TransactionStore::load(conn, &user);
    let status = store.remove(id);
    report_status(&status);
    match status {
        SaveStatus::Unchanged => println!("No transaction with id {}", id),
        SaveStatus::Saved | SaveStatus::Failed(_) => println!("Removed transaction {}", id),
    }
    Ok(())
}

fn report_status(status: &SaveStatus) {
    if let Some(e) = status.warning() {
        eprintln!("warning: changes kept for this session only: {}", e);
    }
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No transactions this month");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.installment.clone(),
                    r.amount.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Description", "Category", "Installment", "Amount", "ID"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub description: String,
    pub category: String,
    pub installment: String,
    /// Signed: `+` for income, `-` for expenses.
    pub amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        let sign = match t.kind {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        };
        Self {
            id: t.id.clone(),
            date: t.date.to_string(),
            r#type: t.kind.to_string(),
            description: t.description.clone(),
            category: t.category.clone(),
            installment: t
                .installment()
                .map(|i| format!("{}/{}", i.current, i.total))
                .unwrap_or_default(),
            amount: format!("{}{}", sign, fmt_money(&t.amount)),
        }
    }
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let user = require_user(conn)?;
    let month = resolve_month(conn, &user, sub)?;
    let store = TransactionStore::load(conn, &user);
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);
    Ok(month_transactions(store.transactions(), month)
        .into_iter()
        .take(limit)
        .map(TransactionRow::from)
        .collect())
}
