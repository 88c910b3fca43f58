// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::TransactionStore;
use crate::utils::require_user;
use anyhow::{Context, Result, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "csv".into());
    let out = sub.get_one::<String>("out").context("--out is required")?;
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let user = require_user(conn)?;
    let store = TransactionStore::load(conn, &user);
    let mut items: Vec<_> = store.transactions().iter().collect();
    items.sort_by(|a, b| a.date.cmp(&b.date));

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)
                .with_context(|| format!("Failed to create {}", out))?;
            wtr.write_record([
                "id",
                "date",
                "type",
                "amount",
                "description",
                "category",
                "installment",
            ])?;
            for t in &items {
                let installment = t
                    .installment()
                    .map(|i| format!("{}/{}", i.current, i.total))
                    .unwrap_or_default();
                let date = t.date.to_string();
                let amount = t.amount.to_string();
                wtr.write_record([
                    t.id.as_str(),
                    date.as_str(),
                    t.kind.as_str(),
                    amount.as_str(),
                    t.description.as_str(),
                    t.category.as_str(),
                    installment.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(out, serde_json::to_string_pretty(&items)?)
                .with_context(|| format!("Failed to write {}", out))?;
        }
    }
    println!("Exported {} transactions to {}", items.len(), out);
    Ok(())
}
