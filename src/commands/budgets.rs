// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::budget::{load_budget, save_budget};
use crate::utils::{fmt_money, parse_decimal, require_user};
use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("show", _)) => show(conn)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let user = require_user(conn)?;
    let amount = parse_decimal(sub.get_one::<String>("amount").context("amount is required")?)?;
    save_budget(conn, &user, amount)?;
    println!("Monthly budget set to {}", fmt_money(&amount));
    Ok(())
}

fn show(conn: &Connection) -> Result<()> {
    let user = require_user(conn)?;
    println!("Monthly budget: {}", fmt_money(&load_budget(conn, &user)));
    Ok(())
}
