// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::navigator::{Direction, MonthNavigator};
use crate::session;
use crate::utils::{month_heading, require_user};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let nav = navigate(conn, m.subcommand_name())?;
    println!("{}", month_heading(&nav));
    Ok(())
}

/// Applies a navigation command to the saved month and returns the result.
pub fn navigate(conn: &Connection, action: Option<&str>) -> Result<MonthNavigator> {
    let user = require_user(conn)?;
    let mut nav = session::navigator(conn, &user);
    match action {
        Some("prev") => {
            nav.step(Direction::Prev);
        }
        Some("next") => {
            nav.step(Direction::Next);
        }
        Some("today") => nav = MonthNavigator::new(),
        _ => return Ok(nav),
    }
    session::save_navigator(conn, &user, &nav)?;
    Ok(nav)
}
